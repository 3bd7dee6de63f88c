//! Runs [`GitHubEffect`]s through octocrab.
//!
//! Each effect is one request. Failures are wrapped with what was being done
//! and returned; nothing is retried.

use crate::effects::{GitHubEffect, GitHubInterpreter, GitHubResponse, IssueData};

use super::client::OctocrabClient;
use super::error::GitHubApiError;

impl GitHubInterpreter for OctocrabClient {
    type Error = GitHubApiError;

    async fn interpret(&self, effect: GitHubEffect) -> Result<GitHubResponse, Self::Error> {
        match effect {
            GitHubEffect::GetIssue { issue } => {
                tracing::debug!(repo = %self.repo(), %issue, "Fetching issue");
                let fetched = self.fetch_issue(issue).await.map_err(|e| {
                    GitHubApiError::from_octocrab(&format!("fetching issue {}", issue), e)
                })?;
                Ok(GitHubResponse::Issue(IssueData {
                    number: issue,
                    body: fetched.body.unwrap_or_default(),
                }))
            }
            GitHubEffect::UpdateIssueBody { issue, body } => {
                tracing::debug!(
                    repo = %self.repo(),
                    %issue,
                    bytes = body.len(),
                    "Updating issue body"
                );
                self.patch_issue_body(issue, &body).await.map_err(|e| {
                    GitHubApiError::from_octocrab(&format!("updating issue {}", issue), e)
                })?;
                Ok(GitHubResponse::IssueUpdated)
            }
        }
    }
}
