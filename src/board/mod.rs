//! The scrum board: three tables in the issue body, rewritten from comments.
//!
//! [`apply_comment`] is the whole transform. It is pure: it takes the current
//! issue body and a comment, and returns the new body along with what changed.
//! Fetching and writing the body is the caller's job (see [`crate::bot`]).
//!
//! # Layout
//!
//! ```text
//! ## 1. 아젠다/결과/피드백
//! | No | Agenda | Proposer | Responder | Answer | Feedback | Result |
//! ## 2. Will do (누가 언제까지 무엇을)
//! | What | Who | Goal | Due |
//! ## 3. TBD (논의가 완료되지 않은 아젠다)
//! | Content | Note | Kind | DM | Discuss |
//! ```
//!
//! Headings and placeholder markers come from [`BoardLayout`].

mod agenda;
mod slots;

use serde::{Deserialize, Serialize};

use crate::agenda::{AgendaTag, extract_agenda_blocks, mentions};
use crate::commands::{Command, parse_command};
use crate::types::DisplayName;

pub use agenda::answer_agenda;
pub use slots::{apply_tbd, apply_willdo};

/// Default heading of the agenda section.
pub const DEFAULT_AGENDA_HEADING: &str = "1. 아젠다/결과/피드백";
/// Default heading of the will-do section.
pub const DEFAULT_WILLDO_HEADING: &str = "2. Will do (누가 언제까지 무엇을)";
/// Default heading of the TBD section.
pub const DEFAULT_TBD_HEADING: &str = "3. TBD (논의가 완료되지 않은 아젠다)";
/// Default marker of an unfilled will-do row.
pub const DEFAULT_WILLDO_PLACEHOLDER: &str = "[업무 내용 입력]";
/// Default marker of an unfilled TBD row.
pub const DEFAULT_TBD_PLACEHOLDER: &str = "[논의할 내용]";

/// Where the board's sections are and how empty rows are marked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardLayout {
    /// Title prefix of the agenda section's `##` heading.
    pub agenda_heading: String,
    /// Title prefix of the will-do section's `##` heading.
    pub willdo_heading: String,
    /// Title prefix of the TBD section's `##` heading.
    pub tbd_heading: String,
    /// Marker in the `What` cell of will-do rows waiting to be filled.
    pub willdo_placeholder: String,
    /// Marker in the `Content` cell of TBD rows waiting to be filled.
    pub tbd_placeholder: String,
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self {
            agenda_heading: DEFAULT_AGENDA_HEADING.to_string(),
            willdo_heading: DEFAULT_WILLDO_HEADING.to_string(),
            tbd_heading: DEFAULT_TBD_HEADING.to_string(),
            willdo_placeholder: DEFAULT_WILLDO_PLACEHOLDER.to_string(),
            tbd_placeholder: DEFAULT_TBD_PLACEHOLDER.to_string(),
        }
    }
}

/// How a command's row ended up in its table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    /// A placeholder row was overwritten.
    Filled,
    /// No placeholder was left, so a new row was added after the table.
    Appended,
}

/// A single change made to the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Change {
    /// Agenda rows for `tag` received an answer.
    AgendaAnswered { tag: AgendaTag, rows: usize },
    /// A `/willdo` row was written.
    WillDo { placement: Placement },
    /// A `/tbd` row was written.
    Tbd { placement: Placement },
}

/// The outcome of applying one comment to the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transform {
    /// The issue body after all updates.
    pub body: String,
    /// The updates that changed the body, in the order they were applied.
    pub changes: Vec<Change>,
}

impl Transform {
    /// Returns true if any update changed the body.
    pub fn is_changed(&self) -> bool {
        !self.changes.is_empty()
    }
}

/// Applies a comment's agenda blocks and slash command to the issue body.
///
/// 1. Every agenda block answers the author's matching agenda rows. Responder
///    is the comment's mentions, or the author when nobody is mentioned.
/// 2. A leading `/willdo` or `/tbd` fills a placeholder row or appends one.
///
/// Sections or rows that cannot be found are skipped; the rest still apply.
pub fn apply_comment(
    body: &str,
    comment: &str,
    author: &DisplayName,
    layout: &BoardLayout,
) -> Transform {
    let mut current = body.to_string();
    let mut changes = Vec::new();

    let blocks = extract_agenda_blocks(comment);
    if !blocks.is_empty() {
        let mentioned = mentions(comment);
        let responder = if mentioned.is_empty() {
            author.as_str().to_string()
        } else {
            mentioned.join(", ")
        };

        for block in &blocks {
            match answer_agenda(&current, block, author, &responder, layout) {
                Some((next, rows)) => {
                    tracing::debug!(tag = %block.tag, rows, "Answered agenda rows");
                    current = next;
                    changes.push(Change::AgendaAnswered {
                        tag: block.tag,
                        rows,
                    });
                }
                None => {
                    tracing::debug!(tag = %block.tag, author = %author, "No agenda row to answer")
                }
            }
        }
    }

    let command_change = match parse_command(comment) {
        Some(Command::WillDo(cmd)) => apply_willdo(&current, &cmd, author, layout)
            .map(|(next, placement)| (next, Change::WillDo { placement })),
        Some(Command::Tbd(cmd)) => apply_tbd(&current, &cmd, layout)
            .map(|(next, placement)| (next, Change::Tbd { placement })),
        None => None,
    };
    if let Some((next, change)) = command_change {
        tracing::debug!(?change, "Applied command");
        current = next;
        changes.push(change);
    }

    Transform {
        body: current,
        changes,
    }
}
