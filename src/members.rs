//! Login to display-name lookup.
//!
//! The scrum tables name people by how the team knows them, not by GitHub
//! login. The directory is loaded once from configuration; logins it does not
//! know pass through unchanged.

use std::collections::HashMap;

use crate::types::{DisplayName, Login};

/// Maps GitHub logins to the display names used in the scrum tables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberDirectory {
    /// Keyed by ASCII-lowercased login.
    names: HashMap<String, String>,
}

impl MemberDirectory {
    /// Creates a directory from `(login, display name)` pairs.
    pub fn new<I, L, N>(entries: I) -> Self
    where
        I: IntoIterator<Item = (L, N)>,
        L: AsRef<str>,
        N: Into<String>,
    {
        let names = entries
            .into_iter()
            .map(|(login, name)| (login.as_ref().trim().to_ascii_lowercase(), name.into()))
            .collect();
        Self { names }
    }

    /// Parses `login=Display Name` entries separated by commas or newlines.
    ///
    /// Entries without `=`, or with an empty login or name, are skipped.
    pub fn parse(list: &str) -> Self {
        let mut entries = Vec::new();
        for raw in list.split([',', '\n']) {
            let raw = raw.trim();
            if raw.is_empty() {
                continue;
            }
            match raw.split_once('=') {
                Some((login, name)) if !login.trim().is_empty() && !name.trim().is_empty() => {
                    entries.push((login.trim().to_string(), name.trim().to_string()));
                }
                _ => tracing::warn!(entry = raw, "Skipping malformed member entry"),
            }
        }
        Self::new(entries)
    }

    /// Resolves a login to its display name, falling back to the login itself.
    pub fn display_name(&self, login: &Login) -> DisplayName {
        match self.names.get(&login.as_str().to_ascii_lowercase()) {
            Some(name) => DisplayName::new(name.clone()),
            None => DisplayName::new(login.as_str()),
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
