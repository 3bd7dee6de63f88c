//! Shared test fixtures and helpers.

use crate::board::{
    BoardLayout, DEFAULT_AGENDA_HEADING, DEFAULT_TBD_HEADING, DEFAULT_WILLDO_HEADING,
};
use crate::markdown::{TableRow, data_row_indices, find_section};

pub const AGENDA: &str = DEFAULT_AGENDA_HEADING;
pub const WILL_DO: &str = DEFAULT_WILLDO_HEADING;
pub const TBD: &str = DEFAULT_TBD_HEADING;

/// A scrum issue body in the default layout.
///
/// Agenda rows, in order: Mona/오늘 할 일, Mona/예상되는 이슈, Hubot/오늘 할 일,
/// Mona/작일 회고. Will-do placeholders for Mona then Hubot; one TBD placeholder.
pub const SAMPLE_BODY: &str = "\
# Daily Scrum

Leave a comment with `[오늘 할 일]`, `/willdo` or `/tbd`.

## 1. 아젠다/결과/피드백
| No | Agenda | Proposer | Responder | Answer | Feedback | Result |
|----|--------|----------|-----------|--------|----------|--------|
| 1 | 오늘 할 일 | Mona | - | - | | |
| 2 | 예상되는 이슈 | Mona | - | - | | |
| 3 | 오늘 할 일 | Hubot | - | - | | |
| 4 | 작일 회고 | Mona | - | - | | |

## 2. Will do (누가 언제까지 무엇을)
| What | Who | Goal | Due |
|------|-----|------|-----|
| [업무 내용 입력] | Mona | | |
| [업무 내용 입력] | Hubot | | |

### How to fill
Comment `/willdo what | goal | due`.

## 3. TBD (논의가 완료되지 않은 아젠다)
| Content | Note | Kind | DM | Discuss |
|---------|------|------|----|---------|
| [논의할 내용] | | | | |
";

/// A layout with short English headings and an `[empty]` marker, for tests
/// that spell out a small body inline.
pub fn short_layout() -> BoardLayout {
    BoardLayout {
        agenda_heading: "Agenda".to_string(),
        willdo_heading: "Will Do".to_string(),
        tbd_heading: "TBD".to_string(),
        willdo_placeholder: "[empty]".to_string(),
        tbd_placeholder: "[empty]".to_string(),
    }
}

/// Returns the text of the section headed `heading`, or an empty string.
pub fn section_of(body: &str, heading: &str) -> String {
    find_section(body, heading)
        .map(|range| body[range].to_string())
        .unwrap_or_default()
}

/// Returns the cells of every data row in the section headed `heading`.
pub fn data_rows(body: &str, heading: &str) -> Vec<Vec<String>> {
    let section = section_of(body, heading);
    let lines: Vec<String> = section.lines().map(String::from).collect();
    data_row_indices(&lines)
        .into_iter()
        .filter_map(|i| TableRow::parse(&lines[i]))
        .map(|row| row.cells().to_vec())
        .collect()
}
