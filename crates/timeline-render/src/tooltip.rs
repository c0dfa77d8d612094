//! Tooltip panel content.

use timeline_model::Record;

/// Tooltip body for one marker.
///
/// One block per grouped record — display date, display event, full
/// description — in encounter order, blocks separated by a blank line.
pub fn tooltip_text<'a>(records: impl IntoIterator<Item = &'a Record>) -> String {
    let blocks: Vec<String> = records
        .into_iter()
        .map(|record| {
            format!(
                "{}\n{}\n{}",
                record.date_display, record.event_display, record.description
            )
        })
        .collect();
    blocks.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocks_are_separated_by_blank_lines() {
        let first = Record {
            date_display: "01/01/2024".to_string(),
            event_display: "Kickoff".to_string(),
            description: "Project start".to_string(),
            ..Record::default()
        };
        let second = Record {
            date_display: "01/01/2024".to_string(),
            event_display: "Review".to_string(),
            description: "Afternoon review".to_string(),
            ..Record::default()
        };

        let text = tooltip_text([&first, &second]);
        assert_eq!(
            text,
            "01/01/2024\nKickoff\nProject start\n\n01/01/2024\nReview\nAfternoon review"
        );
    }

    #[test]
    fn empty_group_yields_empty_text() {
        assert_eq!(tooltip_text(std::iter::empty::<&Record>()), "");
    }
}
