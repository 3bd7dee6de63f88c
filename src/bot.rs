//! One bot run: gate the comment, fetch the issue, transform, write back.
//!
//! ```text
//! bot author? ──yes──▶ Ignored
//!     │no
//!     ▼
//! GetIssue ─▶ apply_comment ─▶ changed? ──no──▶ Unchanged
//!                                 │yes
//!                                 ▼
//!                  dry run? ──yes──▶ DryRun
//!                                 │no
//!                                 ▼
//!                         UpdateIssueBody ─▶ Edited
//! ```
//!
//! There is no retry and no conflict detection: if two comments are handled
//! at the same time, the last write wins.

use thiserror::Error;

use crate::board::{BoardLayout, Change, apply_comment};
use crate::effects::{GitHubEffect, GitHubInterpreter, GitHubResponse};
use crate::event::CommentEvent;
use crate::members::MemberDirectory;

/// Whether a changed body is written back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// Write the new body to the issue.
    #[default]
    Apply,
    /// Compute and log the new body, but leave the issue alone.
    DryRun,
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The comment came from a bot account and was not looked at.
    Ignored,
    /// Nothing in the comment changed the issue body.
    Unchanged,
    /// The issue body was rewritten.
    Edited { changes: Vec<Change> },
    /// The body would have been rewritten, but this was a dry run.
    DryRun { changes: Vec<Change>, body: String },
}

/// Errors that end a run.
#[derive(Debug, Error)]
pub enum BotError<E>
where
    E: std::error::Error + 'static,
{
    /// A GitHub API call failed.
    #[error(transparent)]
    Api(E),

    /// The interpreter answered an effect with the wrong response type.
    #[error("unexpected response to {effect}: {response:?}")]
    UnexpectedResponse {
        effect: &'static str,
        response: GitHubResponse,
    },
}

/// Handles one comment on the scrum issue.
pub async fn handle_comment<I>(
    client: &I,
    event: &CommentEvent,
    members: &MemberDirectory,
    layout: &BoardLayout,
    mode: WriteMode,
) -> Result<Outcome, BotError<I::Error>>
where
    I: GitHubInterpreter,
{
    if event.is_from_bot() {
        tracing::info!(author = %event.author, "Ignoring comment from bot account");
        return Ok(Outcome::Ignored);
    }

    let author = members.display_name(&event.author);
    tracing::debug!(login = %event.author, name = %author, "Resolved comment author");

    let original = match client
        .interpret(GitHubEffect::GetIssue { issue: event.issue })
        .await
        .map_err(BotError::Api)?
    {
        GitHubResponse::Issue(data) => data.body,
        other => {
            return Err(BotError::UnexpectedResponse {
                effect: "get_issue",
                response: other,
            });
        }
    };

    let transform = apply_comment(&original, &event.body, &author, layout);
    if !transform.is_changed() || transform.body == original {
        tracing::info!(issue = %event.issue, "Issue body unchanged");
        return Ok(Outcome::Unchanged);
    }

    if mode == WriteMode::DryRun {
        tracing::info!(
            issue = %event.issue,
            changes = ?transform.changes,
            "Dry run; not updating issue body"
        );
        tracing::debug!(body = %transform.body, "New issue body");
        return Ok(Outcome::DryRun {
            changes: transform.changes,
            body: transform.body,
        });
    }

    match client
        .interpret(GitHubEffect::UpdateIssueBody {
            issue: event.issue,
            body: transform.body,
        })
        .await
        .map_err(BotError::Api)?
    {
        GitHubResponse::IssueUpdated => {}
        other => {
            return Err(BotError::UnexpectedResponse {
                effect: "update_issue_body",
                response: other,
            });
        }
    }

    tracing::info!(issue = %event.issue, changes = ?transform.changes, "Issue body updated");
    Ok(Outcome::Edited {
        changes: transform.changes,
    })
}
