//! GitHub API error type.
//!
//! The bot makes at most two calls per run and never retries, so errors are
//! not categorised further: any failure ends the run.

use std::fmt;
use thiserror::Error;

/// A GitHub API error.
#[derive(Debug, Error)]
pub struct GitHubApiError {
    /// The HTTP status code, if available.
    pub status_code: Option<u16>,

    /// A human-readable description of the error.
    pub message: String,

    /// The underlying octocrab error, if available.
    #[source]
    pub source: Option<octocrab::Error>,
}

impl fmt::Display for GitHubApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status_code {
            Some(code) => write!(f, "GitHub API error (HTTP {}): {}", code, self.message),
            None => write!(f, "GitHub API error: {}", self.message),
        }
    }
}

impl GitHubApiError {
    /// Wraps an octocrab error, adding what the bot was doing at the time.
    pub fn from_octocrab(context: &str, err: octocrab::Error) -> Self {
        let status_code = extract_status_code(&err.to_string());
        Self {
            status_code,
            message: format!("{}: {}", context, err),
            source: Some(err),
        }
    }
}

/// Extracts the HTTP status code from an octocrab error message, if present.
///
/// octocrab's `Error` does not expose the status uniformly across variants,
/// so this reads it from the rendered message. `None` only affects the
/// wording of the error.
fn extract_status_code(err_str: &str) -> Option<u16> {
    if let Some(idx) = err_str.find("status: ") {
        let rest = &err_str[idx + 8..];
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        if let Ok(code) = rest[..end].parse() {
            return Some(code);
        }
    }

    let lower = err_str.to_lowercase();
    [
        (404, "not found"),
        (401, "bad credentials"),
        (403, "forbidden"),
        (422, "unprocessable"),
    ]
    .into_iter()
    .find(|(code, phrase)| contains_number(err_str, *code) || lower.contains(phrase))
    .map(|(code, _)| code)
}

/// Returns true if `code` appears in `text` as a whole run of digits.
fn contains_number(text: &str, code: u16) -> bool {
    let code = code.to_string();
    text.split(|c: char| !c.is_ascii_digit()).any(|run| run == code)
}
