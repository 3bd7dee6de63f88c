//! GitHub calls as data.
//!
//! The bot fetches the scrum issue and may write its body back. Both calls are
//! described by [`GitHubEffect`] values and carried out by a
//! [`GitHubInterpreter`], so a whole run can be tested without a network.

pub mod github;
pub mod interpreter;

pub use github::{GitHubEffect, GitHubResponse, IssueData};
pub use interpreter::GitHubInterpreter;
