//! The real GitHub backend: an octocrab client that implements
//! [`crate::effects::GitHubInterpreter`].

mod client;
mod error;
mod interpreter;

pub use client::OctocrabClient;
pub use error::GitHubApiError;
