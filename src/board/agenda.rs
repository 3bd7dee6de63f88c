//! Agenda table updates.
//!
//! Answers from a comment's agenda blocks land in the rows the author proposed
//! for that agenda item.

use crate::agenda::AgendaBlock;
use crate::markdown::{TableRow, data_row_indices, edit_section};
use crate::types::DisplayName;

use super::BoardLayout;

/// Agenda table columns: `No, Agenda, Proposer, Responder, Answer, Feedback, Result`.
pub(crate) mod col {
    pub const AGENDA: usize = 1;
    pub const PROPOSER: usize = 2;
    pub const RESPONDER: usize = 3;
    pub const ANSWER: usize = 4;
    pub const MIN_CELLS: usize = 7;
}

/// Writes `block` into every agenda row proposed by `author` for the block's tag.
///
/// Answer becomes the block text and Responder becomes `responder`. Returns
/// the new body and the number of rows that changed, or `None` if no row did.
pub fn answer_agenda(
    body: &str,
    block: &AgendaBlock,
    author: &DisplayName,
    responder: &str,
    layout: &BoardLayout,
) -> Option<(String, usize)> {
    let mut updated = 0;
    let result = edit_section(body, &layout.agenda_heading, |lines| {
        for i in data_row_indices(lines) {
            let Some(mut row) = TableRow::parse(&lines[i]) else {
                continue;
            };
            if row.len() < col::MIN_CELLS {
                tracing::debug!(line = %lines[i], "Skipping short agenda row");
                continue;
            }
            let proposed_by_author = row.cell(col::PROPOSER) == Some(author.as_str());
            let same_item = row
                .cell(col::AGENDA)
                .is_some_and(|agenda| block.tag.matches_cell(agenda));
            if !(proposed_by_author && same_item) {
                continue;
            }

            row.set_cell(col::ANSWER, block.text.as_str());
            row.set_cell(col::RESPONDER, responder);
            let rendered = row.render();
            if rendered != lines[i] {
                lines[i] = rendered;
                updated += 1;
            }
        }
        updated > 0
    });

    result.into_changed().map(|new_body| (new_body, updated))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agenda::AgendaTag;
    use crate::test_utils::{AGENDA, SAMPLE_BODY, WILL_DO, data_rows, section_of, short_layout};

    fn block(tag: AgendaTag, text: &str) -> AgendaBlock {
        AgendaBlock {
            tag,
            text: text.to_string(),
        }
    }

    #[test]
    fn answers_matching_row() {
        let layout = BoardLayout::default();
        let (body, updated) = answer_agenda(
            SAMPLE_BODY,
            &block(AgendaTag::TodayPlan, "did X"),
            &DisplayName::new("Mona"),
            "Mona",
            &layout,
        )
        .unwrap();

        assert_eq!(updated, 1);
        let rows = data_rows(&body, AGENDA);
        assert_eq!(rows[0][3], "Mona");
        assert_eq!(rows[0][4], "did X");
        // Hubot's row for the same item is untouched.
        assert_eq!(rows[2], data_rows(SAMPLE_BODY, AGENDA)[2]);
        assert_eq!(section_of(&body, WILL_DO), section_of(SAMPLE_BODY, WILL_DO));
    }

    #[test]
    fn updates_every_matching_row() {
        let body = "## Agenda\n| No | Agenda | Proposer | Responder | Answer | Feedback | Result |\n|---|---|---|---|---|---|---|\n| 1 | 작일 회고 | Mona | - | - | | |\n| 2 | [작일 회고] | Mona | - | - | | |\n";
        let layout = short_layout();

        let (new_body, updated) = answer_agenda(
            body,
            &block(AgendaTag::YesterdayRetro, "went well"),
            &DisplayName::new("Mona"),
            "hubot",
            &layout,
        )
        .unwrap();

        assert_eq!(updated, 2);
        for row in data_rows(&new_body, &layout.agenda_heading) {
            assert_eq!(row[3], "hubot");
            assert_eq!(row[4], "went well");
        }
    }

    #[test]
    fn non_matching_proposer_is_noop() {
        let layout = BoardLayout::default();
        let result = answer_agenda(
            SAMPLE_BODY,
            &block(AgendaTag::TodayPlan, "did X"),
            &DisplayName::new("Stranger"),
            "Stranger",
            &layout,
        );
        assert_eq!(result, None);
    }

    #[test]
    fn header_row_is_never_answered() {
        // A header that happens to look like a matching row.
        let body = "## Agenda\n| 1 | 오늘 할 일 | Mona | - | - | | |\n|---|---|---|---|---|---|---|\n";
        let layout = short_layout();
        let result = answer_agenda(
            body,
            &block(AgendaTag::TodayPlan, "did X"),
            &DisplayName::new("Mona"),
            "Mona",
            &layout,
        );
        assert_eq!(result, None);
    }

    #[test]
    fn short_rows_are_skipped() {
        let body = "## Agenda\n| No | Agenda | Proposer |\n|---|---|---|\n| 1 | 오늘 할 일 | Mona |\n";
        let layout = short_layout();
        let result = answer_agenda(
            body,
            &block(AgendaTag::TodayPlan, "did X"),
            &DisplayName::new("Mona"),
            "Mona",
            &layout,
        );
        assert_eq!(result, None);
    }

    #[test]
    fn same_answer_again_is_noop() {
        let layout = BoardLayout::default();
        let author = DisplayName::new("Mona");
        let b = block(AgendaTag::TodayPlan, "did X");

        let (once, _) = answer_agenda(SAMPLE_BODY, &b, &author, "Mona", &layout).unwrap();
        assert_eq!(answer_agenda(&once, &b, &author, "Mona", &layout), None);
    }
}
