//! Distinct-date marker grouping.

use std::collections::BTreeMap;

use timeline_model::Record;

/// Records sharing one raw date value.
///
/// `member_rows` indexes into the record slice the group was built from,
/// in encounter order; groups themselves are ordered by first encounter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerGroup {
    pub date: String,
    pub member_rows: Vec<usize>,
}

/// Groups records by their raw `date` string.
pub fn group_by_date(records: &[Record]) -> Vec<MarkerGroup> {
    let mut groups: Vec<MarkerGroup> = Vec::new();
    let mut by_date: BTreeMap<String, usize> = BTreeMap::new();

    for (row, record) in records.iter().enumerate() {
        match by_date.get(record.date.as_str()) {
            Some(&slot) => groups[slot].member_rows.push(row),
            None => {
                by_date.insert(record.date.clone(), groups.len());
                groups.push(MarkerGroup {
                    date: record.date.clone(),
                    member_rows: vec![row],
                });
            }
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str) -> Record {
        Record {
            date: date.to_string(),
            ..Record::default()
        }
    }

    #[test]
    fn groups_preserve_encounter_order() {
        let records = vec![
            record("2024-01-01"),
            record("2024-02-01"),
            record("2024-01-01"),
        ];
        let groups = group_by_date(&records);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].date, "2024-01-01");
        assert_eq!(groups[0].member_rows, vec![0, 2]);
        assert_eq!(groups[1].member_rows, vec![1]);
    }

    #[test]
    fn empty_input_yields_no_groups() {
        assert!(group_by_date(&[]).is_empty());
    }
}
