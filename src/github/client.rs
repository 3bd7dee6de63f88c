//! Octocrab connection to the repository that holds the scrum issue.

use octocrab::Octocrab;
use octocrab::models::issues::Issue;
use serde::Serialize;

use crate::types::{IssueNumber, RepoId};

use super::error::GitHubApiError;

/// An authenticated octocrab client bound to the scrum repository.
///
/// Only the two issue calls the bot needs are exposed.
#[derive(Clone)]
pub struct OctocrabClient {
    octocrab: Octocrab,
    repo: RepoId,
}

/// Request body of an issue edit that touches nothing but the body.
#[derive(Serialize)]
struct BodyPatch<'a> {
    body: &'a str,
}

impl OctocrabClient {
    /// Authenticates with `token`.
    ///
    /// In a workflow this is the job's `GITHUB_TOKEN`, which needs
    /// `issues: write`.
    pub fn connect(token: &str, repo: RepoId) -> Result<Self, GitHubApiError> {
        let octocrab = Octocrab::builder()
            .personal_token(token.to_string())
            .build()
            .map_err(|e| GitHubApiError::from_octocrab("building GitHub client", e))?;
        Ok(Self { octocrab, repo })
    }

    pub fn repo(&self) -> &RepoId {
        &self.repo
    }

    pub(super) async fn fetch_issue(&self, issue: IssueNumber) -> Result<Issue, octocrab::Error> {
        self.octocrab
            .issues(&self.repo.owner, &self.repo.repo)
            .get(issue.0)
            .await
    }

    /// Replaces an issue's body. Title, labels and state are left alone.
    pub(super) async fn patch_issue_body(
        &self,
        issue: IssueNumber,
        body: &str,
    ) -> Result<(), octocrab::Error> {
        let route = format!(
            "/repos/{}/{}/issues/{}",
            self.repo.owner, self.repo.repo, issue.0
        );
        let _: serde_json::Value = self.octocrab.patch(route, Some(&BodyPatch { body })).await?;
        Ok(())
    }
}

impl std::fmt::Debug for OctocrabClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The octocrab handle carries the token.
        f.debug_struct("OctocrabClient")
            .field("repo", &self.repo)
            .finish_non_exhaustive()
    }
}
