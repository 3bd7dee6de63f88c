//! Level-2 heading sections.
//!
//! A section starts at its `## ` heading line and runs up to (not including)
//! the next `## ` heading, or to the end of the document. Deeper headings
//! (`###` and below) belong to the enclosing section.

use std::ops::Range;

/// Result of editing a section in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionEdit {
    /// No section with the requested heading exists.
    Missing,
    /// The section exists but the edit left it as it was.
    Unchanged,
    /// The edit changed the section; holds the full new document.
    Changed(String),
}

impl SectionEdit {
    /// Returns the new document if the edit changed anything.
    pub fn into_changed(self) -> Option<String> {
        match self {
            SectionEdit::Changed(body) => Some(body),
            SectionEdit::Missing | SectionEdit::Unchanged => None,
        }
    }
}

/// Returns the title of a level-2 heading line, or `None` for other lines.
fn level2_title(line: &str) -> Option<&str> {
    let line = line.trim_start();
    let title = line.strip_prefix("##")?;
    if title.is_empty() {
        return Some("");
    }
    // "### x" is a deeper heading; "##x" is not a heading at all.
    if !title.starts_with([' ', '\t']) {
        return None;
    }
    Some(title.trim())
}

/// Finds the byte range of the first section whose heading title starts with `heading`.
pub fn find_section(body: &str, heading: &str) -> Option<Range<usize>> {
    let heading = heading.trim();
    let mut start = None;
    let mut offset = 0;

    for line in body.split_inclusive('\n') {
        if let Some(title) = level2_title(line) {
            match start {
                Some(s) => return Some(s..offset),
                None if title.starts_with(heading) => start = Some(offset),
                None => {}
            }
        }
        offset += line.len();
    }

    start.map(|s| s..body.len())
}

/// Applies `edit` to the lines of the section headed `heading`.
///
/// The closure receives the section's lines (heading included, line endings
/// stripped) and returns whether it changed anything. The section is then
/// re-joined with its original line ending and spliced back into `body`.
pub fn edit_section<F>(body: &str, heading: &str, edit: F) -> SectionEdit
where
    F: FnOnce(&mut Vec<String>) -> bool,
{
    let Some(range) = find_section(body, heading) else {
        return SectionEdit::Missing;
    };

    let original = &body[range.clone()];
    let eol = if original.contains("\r\n") { "\r\n" } else { "\n" };
    let mut lines: Vec<String> = original.lines().map(String::from).collect();

    if !edit(&mut lines) {
        return SectionEdit::Unchanged;
    }

    let mut rebuilt = lines.join(eol);
    if original.ends_with('\n') {
        rebuilt.push_str(eol);
    }
    if rebuilt == original {
        return SectionEdit::Unchanged;
    }

    let mut out = String::with_capacity(body.len() - original.len() + rebuilt.len());
    out.push_str(&body[..range.start]);
    out.push_str(&rebuilt);
    out.push_str(&body[range.end..]);
    SectionEdit::Changed(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const DOC: &str = "# Daily scrum\n\n## Agenda\n| a |\n### Notes\nnote\n## Will Do\n| b |\n## TBD\n| c |\n";

    mod find {
        use super::*;

        #[test]
        fn section_runs_to_next_level2_heading() {
            let range = find_section(DOC, "Agenda").unwrap();
            assert_eq!(&DOC[range], "## Agenda\n| a |\n### Notes\nnote\n");
        }

        #[test]
        fn last_section_runs_to_end() {
            let range = find_section(DOC, "TBD").unwrap();
            assert_eq!(&DOC[range], "## TBD\n| c |\n");
        }

        #[test]
        fn heading_matches_by_prefix() {
            let doc = "## Will Do (this week)\n| x |\n";
            assert!(find_section(doc, "Will Do").is_some());
        }

        #[test]
        fn deeper_headings_do_not_match() {
            let doc = "### Agenda\n| x |\n";
            assert_eq!(find_section(doc, "Agenda"), None);
        }

        #[test]
        fn missing_section() {
            assert_eq!(find_section(DOC, "Retro"), None);
        }

        proptest! {
            #[test]
            fn arbitrary_body_never_panics(body in any::<String>(), heading in "[A-Za-z ]{0,10}") {
                if let Some(range) = find_section(&body, &heading) {
                    prop_assert!(body.get(range).is_some());
                }
            }
        }
    }

    mod edit {
        use super::*;

        #[test]
        fn changed_section_is_spliced_back() {
            let result = edit_section(DOC, "Will Do", |lines| {
                lines.push("| new |".to_string());
                true
            });
            assert_eq!(
                result,
                SectionEdit::Changed(
                    "# Daily scrum\n\n## Agenda\n| a |\n### Notes\nnote\n## Will Do\n| b |\n| new |\n## TBD\n| c |\n"
                        .to_string()
                )
            );
        }

        #[test]
        fn unchanged_when_closure_reports_no_change() {
            let result = edit_section(DOC, "Agenda", |_| false);
            assert_eq!(result, SectionEdit::Unchanged);
        }

        #[test]
        fn unchanged_when_lines_are_identical() {
            let result = edit_section(DOC, "Agenda", |lines| {
                lines[1] = "| a |".to_string();
                true
            });
            assert_eq!(result, SectionEdit::Unchanged);
        }

        #[test]
        fn missing_section_is_reported() {
            assert_eq!(edit_section(DOC, "Retro", |_| true), SectionEdit::Missing);
        }

        #[test]
        fn crlf_line_endings_are_preserved() {
            let doc = "## TBD\r\n| c |\r\n## Next\r\n";
            let result = edit_section(doc, "TBD", |lines| {
                lines[1] = "| d |".to_string();
                true
            });
            assert_eq!(
                result.into_changed().as_deref(),
                Some("## TBD\r\n| d |\r\n## Next\r\n")
            );
        }

        #[test]
        fn missing_trailing_newline_is_preserved() {
            let doc = "## TBD\n| c |";
            let result = edit_section(doc, "TBD", |lines| {
                lines[1] = "| d |".to_string();
                true
            });
            assert_eq!(result.into_changed().as_deref(), Some("## TBD\n| d |"));
        }
    }
}
