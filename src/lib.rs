//! Scrum Bot - keeps a team's standup issue in sync with its comments.
//!
//! Team members answer the daily agenda with tagged blocks (`[오늘 할 일]`, ...)
//! and record commitments and open topics with `/willdo` and `/tbd`. The bot
//! rewrites the matching rows of three markdown tables in the issue body.

pub mod agenda;
pub mod board;
pub mod bot;
pub mod commands;
pub mod config;
pub mod effects;
pub mod event;
pub mod github;
pub mod markdown;
pub mod members;
pub mod types;

#[cfg(test)]
pub(crate) mod test_utils;
