//! Pipe-table rows.
//!
//! Rows are handled one line at a time. A line is a table row when its trimmed
//! form starts with `|`; cells are separated by unescaped pipes. Cell text is
//! kept verbatim (including `\|` escapes) so rewriting one cell never disturbs
//! the others.

/// A single pipe-table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    cells: Vec<String>,
}

impl TableRow {
    /// Parses a line as a table row. Returns `None` for non-table lines.
    pub fn parse(line: &str) -> Option<Self> {
        let trimmed = line.trim();
        if !trimmed.starts_with('|') {
            return None;
        }

        let mut pieces = split_unescaped(trimmed);
        // Text before the leading pipe is always empty.
        pieces.remove(0);
        if ends_with_unescaped_pipe(trimmed) && pieces.len() > 1 {
            pieces.pop();
        }

        Some(Self {
            cells: pieces.into_iter().map(|c| c.trim().to_string()).collect(),
        })
    }

    /// Builds a row from cell values.
    pub fn from_cells<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cells: cells.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of cells in the row.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    /// Returns the trimmed text of a cell.
    pub fn cell(&self, index: usize) -> Option<&str> {
        self.cells.get(index).map(String::as_str)
    }

    /// Replaces a cell's text. Out-of-range indices are ignored.
    pub fn set_cell(&mut self, index: usize, value: impl Into<String>) {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = value.into();
        }
    }

    /// Returns true for header/body separator rows such as `|---|:--:|`.
    pub fn is_separator(&self) -> bool {
        !self.cells.is_empty() && self.cells.iter().all(|c| is_separator_cell(c))
    }

    /// Renders the row as a markdown line (without a line ending).
    pub fn render(&self) -> String {
        format!("| {} |", self.cells.join(" | "))
    }
}

/// Returns the indices of data rows among `lines`.
///
/// In each table the second line, when it is a separator, is the delimiter
/// row and the line above it is the header. Neither is a data row, so they can
/// never be matched or rewritten. A later row made only of dashes is ordinary
/// data.
pub fn data_row_indices(lines: &[String]) -> Vec<usize> {
    let rows: Vec<Option<TableRow>> = lines.iter().map(|l| TableRow::parse(l)).collect();
    let is_table = |i: usize| rows.get(i).is_some_and(Option::is_some);
    let is_delimiter = |i: usize| {
        rows.get(i)
            .and_then(Option::as_ref)
            .is_some_and(TableRow::is_separator)
            && i >= 1
            && is_table(i - 1)
            && (i == 1 || !is_table(i - 2))
    };

    (0..rows.len())
        .filter(|&i| is_table(i) && !is_delimiter(i) && !is_delimiter(i + 1))
        .collect()
}

/// Returns the index of the last table line (header, separator or data).
pub fn last_table_line(lines: &[String]) -> Option<usize> {
    lines.iter().rposition(|l| TableRow::parse(l).is_some())
}

/// Normalises free text for use inside a single table cell.
///
/// Lines are trimmed, blank lines dropped and the rest joined with `<br>`;
/// pipes are escaped so they cannot split the cell. Blank text becomes `-`.
pub fn cell_text(text: &str) -> String {
    let joined = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("<br>");
    if joined.is_empty() {
        return "-".to_string();
    }
    escape_pipes(&joined)
}

/// Escapes every unescaped `|`. Already-escaped pipes are left alone.
fn escape_pipes(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut backslashes = 0;
    for c in text.chars() {
        if c == '|' && backslashes % 2 == 0 {
            out.push('\\');
        }
        backslashes = if c == '\\' { backslashes + 1 } else { 0 };
        out.push(c);
    }
    out
}

fn is_separator_cell(cell: &str) -> bool {
    let inner = cell.trim();
    let inner = inner.strip_prefix(':').unwrap_or(inner);
    let inner = inner.strip_suffix(':').unwrap_or(inner);
    !inner.is_empty() && inner.chars().all(|c| c == '-')
}

/// Splits on `|` characters not preceded by a backslash.
fn split_unescaped(text: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut escaped = false;
    for (i, c) in text.char_indices() {
        match c {
            '\\' if !escaped => escaped = true,
            '|' if !escaped => {
                pieces.push(&text[start..i]);
                start = i + 1;
            }
            _ => escaped = false,
        }
        if c != '\\' {
            escaped = false;
        }
    }
    pieces.push(&text[start..]);
    pieces
}

fn ends_with_unescaped_pipe(text: &str) -> bool {
    let Some(body) = text.strip_suffix('|') else {
        return false;
    };
    let backslashes = body.chars().rev().take_while(|&c| c == '\\').count();
    backslashes % 2 == 0
}
