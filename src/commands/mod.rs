//! Command parsing for slash commands.
//!
//! This module provides types and parsing for the commands that team members
//! leave at the start of a comment on the scrum issue.
//!
//! # Supported Commands
//!
//! - `/willdo <what> | <goal> | <due>` - Records a commitment in the will-do table
//! - `/tbd <content> | <note> | <kind> | <dm> | <discuss>` - Records a TBD topic
//!
//! # Example
//!
//! ```
//! use scrum_bot::commands::{parse_command, Command};
//!
//! let comment = "/tbd release notes | draft in wiki | docs | | yes";
//! assert!(matches!(parse_command(comment), Some(Command::Tbd(_))));
//!
//! let comment = "Just chatting, no command.";
//! assert_eq!(parse_command(comment), None);
//! ```

mod parser;
mod types;

pub use parser::parse_command;
pub use types::{Command, Tbd, WillDo};
