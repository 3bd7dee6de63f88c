//! Agenda blocks and mentions in free-text comments.
//!
//! A comment can answer one or more of the standing agenda items by tagging a
//! block of text:
//!
//! ```text
//! [오늘 할 일]
//! Finish the export job, pair with @mona on review.
//! [예상되는 이슈]
//! Staging may be down in the afternoon.
//! ```
//!
//! Each block runs from its tag to the next known tag or the end of the comment.

use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::markdown::cell_text;

/// One of the fixed agenda items of the daily scrum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgendaTag {
    /// `[오늘 할 일]` - today's plan.
    TodayPlan,
    /// `[예상되는 이슈]` - expected issues.
    ExpectedIssues,
    /// `[작일 회고]` - yesterday's retrospective.
    YesterdayRetro,
}

impl AgendaTag {
    /// All tags, in the order their blocks are reported.
    pub const ALL: [AgendaTag; 3] = [
        AgendaTag::TodayPlan,
        AgendaTag::ExpectedIssues,
        AgendaTag::YesterdayRetro,
    ];

    /// The label as it appears inside the brackets and in the Agenda column.
    pub fn label(&self) -> &'static str {
        match self {
            AgendaTag::TodayPlan => "오늘 할 일",
            AgendaTag::ExpectedIssues => "예상되는 이슈",
            AgendaTag::YesterdayRetro => "작일 회고",
        }
    }

    /// The bracketed form used in comments, e.g. `[오늘 할 일]`.
    pub fn marker(&self) -> String {
        format!("[{}]", self.label())
    }

    /// Returns true if an Agenda cell names this tag, with or without brackets.
    pub fn matches_cell(&self, cell: &str) -> bool {
        let cell = cell.trim();
        let cell = cell.strip_prefix('[').unwrap_or(cell);
        let cell = cell.strip_suffix(']').unwrap_or(cell);
        cell.trim() == self.label()
    }
}

impl fmt::Display for AgendaTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A tagged block of comment text, already cleaned for a table cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgendaBlock {
    pub tag: AgendaTag,
    pub text: String,
}

/// Extracts the agenda blocks from a comment.
///
/// Only the first occurrence of each tag is used. A tag with no text after it
/// still counts and answers `-`. The result follows [`AgendaTag::ALL`] order.
///
/// ```
/// use scrum_bot::agenda::{extract_agenda_blocks, AgendaTag};
///
/// let blocks = extract_agenda_blocks("[오늘 할 일] did X\n[작일 회고]\nwent fine");
/// assert_eq!(blocks.len(), 2);
/// assert_eq!(blocks[0].tag, AgendaTag::TodayPlan);
/// assert_eq!(blocks[0].text, "did X");
/// assert_eq!(blocks[1].text, "went fine");
/// ```
pub fn extract_agenda_blocks(comment: &str) -> Vec<AgendaBlock> {
    let occurrences: Vec<(usize, usize)> = AgendaTag::ALL
        .iter()
        .flat_map(|tag| {
            let marker = tag.marker();
            comment
                .match_indices(marker.as_str())
                .map(|(pos, m)| (pos, pos + m.len()))
                .collect::<Vec<_>>()
        })
        .collect();

    AgendaTag::ALL
        .iter()
        .filter_map(|&tag| {
            let marker = tag.marker();
            let start = comment.find(marker.as_str())? + marker.len();
            let end = occurrences
                .iter()
                .map(|&(pos, _)| pos)
                .filter(|&pos| pos >= start)
                .min()
                .unwrap_or(comment.len());
            Some(AgendaBlock {
                tag,
                text: cell_text(&comment[start..end]),
            })
        })
        .collect()
}

static MENTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@([A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)").expect("mention pattern is valid")
});

/// Returns the logins mentioned in `text`.
///
/// Mentions keep their first-seen order and repeats are dropped. An `@`
/// directly after an alphanumeric character (an e-mail address) is not a
/// mention.
pub fn mentions(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    MENTION
        .captures_iter(text)
        .filter_map(|caps| {
            let at = caps.get(0)?.start();
            let preceded_by_word = text[..at]
                .chars()
                .next_back()
                .is_some_and(|c| c.is_alphanumeric() || c == '_');
            if preceded_by_word {
                return None;
            }
            let login = caps.get(1)?.as_str();
            seen.insert(login.to_ascii_lowercase())
                .then(|| login.to_string())
        })
        .collect()
}

/// Joins the mentions in `text` with `", "`, or returns `"-"` if there are none.
///
/// ```
/// use scrum_bot::agenda::extract_mentions;
///
/// assert_eq!(extract_mentions("ping @a and @b"), "a, b");
/// assert_eq!(extract_mentions("nobody here"), "-");
/// ```
pub fn extract_mentions(text: &str) -> String {
    let found = mentions(text);
    if found.is_empty() {
        "-".to_string()
    } else {
        found.join(", ")
    }
}
