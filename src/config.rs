//! Runtime configuration from the environment.
//!
//! The bot runs once per comment, usually as a GitHub Actions step, so all of
//! its inputs arrive as environment variables:
//!
//! | Variable | Meaning |
//! |----------|---------|
//! | `GITHUB_TOKEN` | API token (required) |
//! | `GITHUB_REPOSITORY` | `owner/repo` (required) |
//! | `REPO_NAME` | `owner/repo`, takes precedence over `GITHUB_REPOSITORY` |
//! | `ISSUE_NUMBER` | issue the comment was left on |
//! | `COMMENT_BODY` | comment text |
//! | `COMMENT_AUTHOR` | comment author login |
//! | `COMMENT_AUTHOR_TYPE` | `User`, `Bot`, ... (default `User`) |
//! | `GITHUB_EVENT_PATH` | webhook payload, used when `ISSUE_NUMBER` is unset |
//! | `SCRUM_MEMBERS` | `login=Display Name` entries |
//! | `SCRUM_AGENDA_HEADING` / `SCRUM_WILLDO_HEADING` / `SCRUM_TBD_HEADING` | section headings |
//! | `SCRUM_WILLDO_PLACEHOLDER` / `SCRUM_TBD_PLACEHOLDER` | markers of unfilled rows |
//! | `SCRUM_DRY_RUN` | log the new body instead of writing it |

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::board::BoardLayout;
use crate::event::{AuthorKind, CommentEvent, PayloadError, parse_issue_comment};
use crate::members::MemberDirectory;
use crate::types::{IssueNumber, Login, RepoId};

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required variable is unset or empty.
    #[error("environment variable {0} is not set")]
    Missing(&'static str),

    /// A variable is set but cannot be used.
    #[error("environment variable {var} has invalid value {value:?}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },

    /// The event payload file could not be read.
    #[error("failed to read event payload {path}: {source}")]
    EventFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The event payload is not a usable `issue_comment` payload.
    #[error("invalid event payload: {0}")]
    Payload(#[from] PayloadError),
}

/// Everything the bot needs for one run.
#[derive(Clone)]
pub struct Config {
    /// API token. Never logged.
    pub token: String,
    pub repo: RepoId,
    pub event: CommentEvent,
    pub members: MemberDirectory,
    pub layout: BoardLayout,
    /// Log the would-be body instead of writing it.
    pub dry_run: bool,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("token", &"<redacted>")
            .field("repo", &self.repo)
            .field("event", &self.event)
            .field("members", &self.members.len())
            .field("layout", &self.layout)
            .field("dry_run", &self.dry_run)
            .finish()
    }
}

impl Config {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through `lookup`, which returns a variable's value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Unset and empty are treated alike, as Actions expands missing
        // expressions to "".
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let require = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let token = require("GITHUB_TOKEN")?;

        let (repo_var, repo_raw) = match get("REPO_NAME") {
            Some(raw) => ("REPO_NAME", raw),
            None => ("GITHUB_REPOSITORY", require("GITHUB_REPOSITORY")?),
        };
        let repo = RepoId::parse(&repo_raw).map_err(|e| ConfigError::Invalid {
            var: repo_var,
            value: repo_raw.clone(),
            reason: e.to_string(),
        })?;

        let event = match get("ISSUE_NUMBER") {
            Some(raw) => CommentEvent {
                issue: parse_issue_number(&raw)?,
                // An empty comment is valid input.
                body: lookup("COMMENT_BODY").unwrap_or_default(),
                author: Login::new(require("COMMENT_AUTHOR")?.trim()),
                author_kind: AuthorKind::parse(&get("COMMENT_AUTHOR_TYPE").unwrap_or_default()),
            },
            None => {
                let path = get("GITHUB_EVENT_PATH")
                    .map(PathBuf::from)
                    .ok_or(ConfigError::Missing("ISSUE_NUMBER"))?;
                let payload = std::fs::read(&path)
                    .map_err(|source| ConfigError::EventFile { path, source })?;
                parse_issue_comment(&payload)?
            }
        };

        let members = get("SCRUM_MEMBERS")
            .map(|list| MemberDirectory::parse(&list))
            .unwrap_or_default();

        let defaults = BoardLayout::default();
        let layout = BoardLayout {
            agenda_heading: get("SCRUM_AGENDA_HEADING").unwrap_or(defaults.agenda_heading),
            willdo_heading: get("SCRUM_WILLDO_HEADING").unwrap_or(defaults.willdo_heading),
            tbd_heading: get("SCRUM_TBD_HEADING").unwrap_or(defaults.tbd_heading),
            willdo_placeholder: get("SCRUM_WILLDO_PLACEHOLDER")
                .unwrap_or(defaults.willdo_placeholder),
            tbd_placeholder: get("SCRUM_TBD_PLACEHOLDER").unwrap_or(defaults.tbd_placeholder),
        };

        let dry_run = get("SCRUM_DRY_RUN").is_some_and(|v| is_truthy(&v));

        Ok(Config {
            token,
            repo,
            event,
            members,
            layout,
            dry_run,
        })
    }
}

fn parse_issue_number(raw: &str) -> Result<IssueNumber, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(n) if n > 0 => Ok(IssueNumber(n)),
        Ok(_) => Err(ConfigError::Invalid {
            var: "ISSUE_NUMBER",
            value: raw.to_string(),
            reason: "issue numbers start at 1".to_string(),
        }),
        Err(e) => Err(ConfigError::Invalid {
            var: "ISSUE_NUMBER",
            value: raw.to_string(),
            reason: e.to_string(),
        }),
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
