//! Placeholder-or-append row updates for the will-do and TBD tables.
//!
//! Both tables are seeded with placeholder rows that carry the table's
//! placeholder marker from the layout. A command fills the first matching placeholder; once
//! none is left the new row goes directly after the last line of the table.

use crate::commands::{Tbd, WillDo};
use crate::markdown::{SectionEdit, TableRow, cell_text, data_row_indices, edit_section, last_table_line};
use crate::types::DisplayName;

use super::{BoardLayout, Placement};

/// Will-do table columns: `What, Who, Goal, Due`.
pub(crate) mod willdo_col {
    pub const WHAT: usize = 0;
    pub const WHO: usize = 1;
    pub const MIN_CELLS: usize = 4;
}

/// TBD table columns: `Content, Note, Kind, DM, Discuss`.
pub(crate) mod tbd_col {
    pub const CONTENT: usize = 0;
    pub const MIN_CELLS: usize = 5;
}

/// Records a `/willdo` in the author's placeholder row, or appends a row.
pub fn apply_willdo(
    body: &str,
    cmd: &WillDo,
    author: &DisplayName,
    layout: &BoardLayout,
) -> Option<(String, Placement)> {
    let row = TableRow::from_cells([
        cell_text(&cmd.what),
        cell_text(author.as_str()),
        cell_text(&cmd.goal),
        cell_text(&cmd.due),
    ]);

    fill_or_append(body, &layout.willdo_heading, row, |existing| {
        existing.len() >= willdo_col::MIN_CELLS
            && existing.cell(willdo_col::WHO) == Some(author.as_str())
            && existing
                .cell(willdo_col::WHAT)
                .is_some_and(|what| what.contains(layout.willdo_placeholder.as_str()))
    })
}

/// Records a `/tbd` in the first placeholder row, or appends a row.
pub fn apply_tbd(body: &str, cmd: &Tbd, layout: &BoardLayout) -> Option<(String, Placement)> {
    let row = TableRow::from_cells([
        cell_text(&cmd.content),
        cell_text(&cmd.note),
        cell_text(&cmd.kind),
        cell_text(&cmd.dm),
        cell_text(&cmd.discuss),
    ]);

    fill_or_append(body, &layout.tbd_heading, row, |existing| {
        existing.len() >= tbd_col::MIN_CELLS
            && existing
                .cell(tbd_col::CONTENT)
                .is_some_and(|content| content.contains(layout.tbd_placeholder.as_str()))
    })
}

/// Replaces the first data row accepted by `is_slot` with `row`; if there is
/// none, inserts `row` after the section's last table line.
///
/// Returns `None` when the section or its table is missing, or nothing changed.
fn fill_or_append<F>(
    body: &str,
    heading: &str,
    row: TableRow,
    is_slot: F,
) -> Option<(String, Placement)>
where
    F: Fn(&TableRow) -> bool,
{
    let mut placement = None;
    let result = edit_section(body, heading, |lines| {
        let slot = data_row_indices(lines).into_iter().find(|&i| {
            TableRow::parse(&lines[i]).is_some_and(|existing| is_slot(&existing))
        });

        match slot {
            Some(i) => {
                lines[i] = row.render();
                placement = Some(Placement::Filled);
                true
            }
            None => match last_table_line(lines) {
                Some(last) => {
                    lines.insert(last + 1, row.render());
                    placement = Some(Placement::Appended);
                    true
                }
                None => {
                    tracing::warn!(section = heading, "Section has no table; skipping update");
                    false
                }
            },
        }
    });

    match result {
        SectionEdit::Changed(new_body) => Some((new_body, placement?)),
        SectionEdit::Unchanged => None,
        SectionEdit::Missing => {
            tracing::warn!(section = heading, "Section not found; skipping update");
            None
        }
    }
}
