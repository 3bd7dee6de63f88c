//! The comment event the bot reacts to.
//!
//! An event is either assembled from individual environment variables or
//! parsed from the `issue_comment` webhook payload that GitHub Actions writes
//! to `GITHUB_EVENT_PATH`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{IssueNumber, Login};

/// The kind of account that wrote a comment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuthorKind {
    User,
    Bot,
    Organization,
    /// Any other value GitHub reports, kept verbatim.
    Other(String),
}

impl AuthorKind {
    /// Parses GitHub's `user.type` field (case-insensitive).
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "user" => AuthorKind::User,
            "bot" => AuthorKind::Bot,
            "organization" => AuthorKind::Organization,
            _ => AuthorKind::Other(s.trim().to_string()),
        }
    }
}

/// A comment on the scrum issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentEvent {
    /// The issue the comment was left on.
    pub issue: IssueNumber,

    /// The comment body text. Empty if GitHub sent none.
    pub body: String,

    /// The comment author's login.
    pub author: Login,

    /// The comment author's account type.
    pub author_kind: AuthorKind,
}

impl CommentEvent {
    /// Returns true if the comment was written by a bot account.
    ///
    /// GitHub Apps comment as `<name>[bot]`; some integrations report
    /// `type: User` for those, so the suffix counts too.
    pub fn is_from_bot(&self) -> bool {
        self.author_kind == AuthorKind::Bot || self.author.as_str().ends_with("[bot]")
    }
}

/// Errors that can occur when parsing a webhook payload.
#[derive(Debug, Error)]
pub enum PayloadError {
    /// JSON deserialization failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The payload is for a different event type.
    #[error("not an issue_comment payload: missing {0}")]
    NotIssueComment(&'static str),
}

#[derive(Debug, Deserialize)]
struct RawIssueCommentPayload {
    comment: Option<RawComment>,
    issue: Option<RawIssue>,
}

#[derive(Debug, Deserialize)]
struct RawComment {
    body: Option<String>,
    user: RawUser,
}

#[derive(Debug, Deserialize)]
struct RawIssue {
    number: u64,
}

#[derive(Debug, Deserialize)]
struct RawUser {
    login: String,
    #[serde(rename = "type", default)]
    kind: Option<String>,
}

/// Parses an `issue_comment` webhook payload.
pub fn parse_issue_comment(payload: &[u8]) -> Result<CommentEvent, PayloadError> {
    let raw: RawIssueCommentPayload = serde_json::from_slice(payload)?;
    let comment = raw.comment.ok_or(PayloadError::NotIssueComment("comment"))?;
    let issue = raw.issue.ok_or(PayloadError::NotIssueComment("issue"))?;

    Ok(CommentEvent {
        issue: IssueNumber(issue.number),
        body: comment.body.unwrap_or_default(),
        author: Login::new(comment.user.login),
        author_kind: AuthorKind::parse(comment.user.kind.as_deref().unwrap_or_default()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn event(login: &str, kind: AuthorKind) -> CommentEvent {
        CommentEvent {
            issue: IssueNumber(1),
            body: String::new(),
            author: Login::from(login),
            author_kind: kind,
        }
    }

    #[test]
    fn author_kind_parsing() {
        assert_eq!(AuthorKind::parse("User"), AuthorKind::User);
        assert_eq!(AuthorKind::parse("bot"), AuthorKind::Bot);
        assert_eq!(AuthorKind::parse("BOT"), AuthorKind::Bot);
        assert_eq!(AuthorKind::parse("Organization"), AuthorKind::Organization);
        assert_eq!(AuthorKind::parse(""), AuthorKind::User);
        assert_eq!(
            AuthorKind::parse("Mannequin"),
            AuthorKind::Other("Mannequin".to_string())
        );
    }

    #[test]
    fn bot_detection() {
        assert!(event("renovate", AuthorKind::Bot).is_from_bot());
        assert!(event("github-actions[bot]", AuthorKind::User).is_from_bot());
        assert!(!event("octocat", AuthorKind::User).is_from_bot());
    }

    #[test]
    fn parse_issue_comment_created() {
        let payload = r#"{
            "action": "created",
            "comment": {
                "id": 12345,
                "body": "/willdo a | b | c",
                "user": { "id": 100, "login": "octocat", "type": "User" }
            },
            "issue": { "number": 42, "title": "Daily Scrum" },
            "repository": { "owner": { "login": "myorg" }, "name": "myrepo" }
        }"#;

        let e = parse_issue_comment(payload.as_bytes()).unwrap();
        assert_eq!(e.issue, IssueNumber(42));
        assert_eq!(e.body, "/willdo a | b | c");
        assert_eq!(e.author, Login::from("octocat"));
        assert_eq!(e.author_kind, AuthorKind::User);
    }

    #[test]
    fn parse_bot_comment() {
        let payload = r#"{
            "comment": { "body": "beep", "user": { "login": "github-actions[bot]", "type": "Bot" } },
            "issue": { "number": 3 }
        }"#;

        let e = parse_issue_comment(payload.as_bytes()).unwrap();
        assert!(e.is_from_bot());
    }

    #[test]
    fn missing_body_is_empty() {
        let payload = r#"{
            "comment": { "user": { "login": "octocat" } },
            "issue": { "number": 3 }
        }"#;

        let e = parse_issue_comment(payload.as_bytes()).unwrap();
        assert_eq!(e.body, "");
        assert_eq!(e.author_kind, AuthorKind::User);
    }

    #[test]
    fn other_event_is_rejected() {
        let payload = r#"{ "action": "opened", "pull_request": { "number": 1 } }"#;
        assert!(matches!(
            parse_issue_comment(payload.as_bytes()),
            Err(PayloadError::NotIssueComment("comment"))
        ));
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(matches!(
            parse_issue_comment(b"{not json"),
            Err(PayloadError::Json(_))
        ));
    }

    proptest! {
        #[test]
        fn arbitrary_payload_never_panics(payload: Vec<u8>) {
            let _ = parse_issue_comment(&payload);
        }
    }
}
