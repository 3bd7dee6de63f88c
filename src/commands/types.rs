//! Command types for slash commands.
//!
//! These commands are parsed from the start of a GitHub issue comment.

use serde::{Deserialize, Serialize};

/// A parsed slash command from a comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Records a commitment: `/willdo <what> | <goal> | <due>`
    ///
    /// Fills the author's placeholder row in the will-do table, or appends a
    /// new row when the author has none left.
    WillDo(WillDo),

    /// Records a topic to be discussed:
    /// `/tbd <content> | <note> | <kind> | <dm> | <discuss>`
    ///
    /// Fills the first placeholder row in the TBD table, or appends one.
    Tbd(Tbd),
}

/// Arguments of a `/willdo` command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WillDo {
    pub what: String,
    pub goal: String,
    pub due: String,
}

/// Arguments of a `/tbd` command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tbd {
    pub content: String,
    pub note: String,
    pub kind: String,
    pub dm: String,
    pub discuss: String,
}
