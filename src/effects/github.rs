//! GitHub API effect types.
//!
//! These types describe GitHub API operations as data, without executing them.
//! The octocrab interpreter in [`crate::github`] executes them against the
//! actual GitHub API; tests use an in-memory interpreter instead.

use serde::{Deserialize, Serialize};

use crate::types::IssueNumber;

/// A GitHub API effect.
///
/// Effects are repo-scoped: the interpreter is constructed with a `RepoId`,
/// so effects don't include it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GitHubEffect {
    /// Fetch a single issue by number.
    GetIssue { issue: IssueNumber },

    /// Replace an issue's body.
    UpdateIssueBody { issue: IssueNumber, body: String },
}

/// Issue data returned from the GitHub API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueData {
    /// The issue number.
    pub number: IssueNumber,
    /// The issue body. An issue without a body is reported as empty.
    pub body: String,
}

/// Response from a GitHub effect.
///
/// Each variant corresponds to the response from a particular effect type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum GitHubResponse {
    /// Response to `GetIssue`.
    Issue(IssueData),

    /// Response to `UpdateIssueBody`.
    IssueUpdated,
}
