//! Core domain types for the scrum bot.

pub mod ids;

pub use ids::{DisplayName, InvalidRepoId, IssueNumber, Login, RepoId};
