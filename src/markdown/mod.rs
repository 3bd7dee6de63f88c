//! Best-effort markdown editing for the scrum issue body.
//!
//! This is not a markdown parser. Sections are found by their
//! level-2 heading text and table rows by a leading `|`; everything else in
//! the document is carried through byte-for-byte.

pub mod section;
pub mod table;

pub use section::{SectionEdit, edit_section, find_section};
pub use table::{TableRow, cell_text, data_row_indices, last_table_line};
