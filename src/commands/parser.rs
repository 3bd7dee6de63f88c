//! Parser for slash commands in comment text.
//!
//! This module provides a pure parser that extracts structured commands from
//! unstructured GitHub comment text.

use crate::agenda::AgendaTag;

use super::types::{Command, Tbd, WillDo};

/// Parses the slash command leading a comment.
///
/// # Parsing Rules
///
/// - The command must be the first thing in the comment (leading whitespace is ignored)
/// - Command names (`willdo`, `tbd`) are case-insensitive
/// - The command name must be followed by whitespace or the end of the comment
/// - Arguments run from the command name to the first agenda tag (or the end
///   of the comment), may span lines, and are split on `|` and trimmed
/// - Missing trailing arguments are empty strings; surplus arguments are dropped
/// - Returns `None` if the comment does not start with a known command
///
/// # Examples
///
/// ```
/// use scrum_bot::commands::{parse_command, Command, WillDo};
///
/// assert_eq!(
///     parse_command("/willdo write docs | v1 ships | Fri"),
///     Some(Command::WillDo(WillDo {
///         what: "write docs".into(),
///         goal: "v1 ships".into(),
///         due: "Fri".into(),
///     }))
/// );
/// assert_eq!(parse_command("no command here"), None);
/// // Must lead the comment:
/// assert_eq!(parse_command("see /willdo a | b | c"), None);
/// ```
pub fn parse_command(text: &str) -> Option<Command> {
    let text = text.trim_start();
    let text = text.strip_prefix('/')?;

    let (cmd_word, rest) = split_first_word(text);
    let args = arguments(rest);

    match cmd_word.to_ascii_lowercase().as_str() {
        "willdo" => {
            let [what, goal, due] = split_fields(args);
            Some(Command::WillDo(WillDo { what, goal, due }))
        }
        "tbd" => {
            let [content, note, kind, dm, discuss] = split_fields(args);
            Some(Command::Tbd(Tbd {
                content,
                note,
                kind,
                dm,
                discuss,
            }))
        }
        _ => None,
    }
}

/// Splits pipe-delimited arguments into exactly `N` trimmed fields.
fn split_fields<const N: usize>(args: &str) -> [String; N] {
    let mut fields = args.split('|').map(|f| f.trim().to_string());
    std::array::from_fn(|_| fields.next().unwrap_or_default())
}

/// Returns the text up to the first agenda tag, so blocks after a command
/// are left for the agenda.
fn arguments(text: &str) -> &str {
    let end = AgendaTag::ALL
        .iter()
        .filter_map(|tag| text.find(tag.marker().as_str()))
        .min()
        .unwrap_or(text.len());
    &text[..end]
}

/// Splits text at the first whitespace, returning (word, rest).
/// If no whitespace, returns (text, "").
fn split_first_word(text: &str) -> (&str, &str) {
    match text.find(|c: char| c.is_whitespace()) {
        Some(pos) => (&text[..pos], &text[pos..]),
        None => (text, ""),
    }
}
