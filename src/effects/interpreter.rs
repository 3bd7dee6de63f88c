//! The seam between the bot and the GitHub API.
//!
//! [`crate::bot::handle_comment`] only ever talks to GitHub through this
//! trait. The binary plugs in [`crate::github::OctocrabClient`]; the bot's
//! tests plug in an in-memory issue that records every effect it is handed.

use std::future::Future;

use super::github::{GitHubEffect, GitHubResponse};

/// Runs [`GitHubEffect`]s for a single repository.
///
/// A run issues at most one `GetIssue` and one `UpdateIssueBody`, in that
/// order. Implementations answer `GetIssue` with [`GitHubResponse::Issue`]
/// and `UpdateIssueBody` with [`GitHubResponse::IssueUpdated`]; any other
/// pairing is reported by the caller as an unexpected response.
pub trait GitHubInterpreter {
    /// Why an effect could not be carried out.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Carries out `effect` and returns GitHub's answer.
    fn interpret(
        &self,
        effect: GitHubEffect,
    ) -> impl Future<Output = Result<GitHubResponse, Self::Error>> + Send;
}
