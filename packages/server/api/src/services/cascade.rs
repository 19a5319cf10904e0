use std::collections::BTreeSet;

use database::models::FilterRow;
use shared::{CascadeData, YearMonth};

/// Projects the filtered tuple set onto each of the five dimensions.
///
/// Every dimension is projected from the SAME row set, already narrowed by
/// the full filter conjunction. That is what makes the cascade mutual: a
/// value shows up for a dimension only if some row carries it together with
/// all currently selected values of the other dimensions.
///
/// NULL and empty cells are dropped. Output per dimension is ascending and
/// duplicate-free; time renders as zero-padded "YYYY-MM", so its sort is
/// chronological.
pub fn resolve(rows: &[FilterRow]) -> CascadeData {
    let mut bg = BTreeSet::new();
    let mut bu = BTreeSet::new();
    let mut country = BTreeSet::new();
    let mut plant = BTreeSet::new();
    let mut time = BTreeSet::new();

    for row in rows {
        insert_value(&mut bg, &row.business_group);
        insert_value(&mut bu, &row.business_unit);
        insert_value(&mut country, &row.country);
        insert_value(&mut plant, &row.plant);
        if let (Some(year), Some(month)) = (row.year, row.month) {
            time.insert(YearMonth::new(year, month as u32));
        }
    }

    CascadeData {
        bg: bg.into_iter().collect(),
        bu: bu.into_iter().collect(),
        country: country.into_iter().collect(),
        plant: plant.into_iter().collect(),
        time: time.into_iter().map(|ym| ym.to_string()).collect(),
    }
}

fn insert_value(set: &mut BTreeSet<String>, value: &Option<String>) {
    if let Some(v) = value {
        if !v.is_empty() {
            set.insert(v.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(bg: &str, bu: &str, country: &str, plant: &str, year: i32, month: i32) -> FilterRow {
        FilterRow::new(Some(bg), Some(bu), Some(country), Some(plant), year, month)
    }

    #[test]
    fn projects_only_values_present_in_the_filtered_set() {
        // Rows as they come back when the caller selected bg = ["BG1"]:
        // BG2's units never reach the resolver.
        let rows = vec![
            row("BG1", "U2", "DE", "P1", 2024, 1),
            row("BG1", "U1", "DE", "P2", 2024, 1),
        ];

        let data = resolve(&rows);
        assert_eq!(data.bg, vec!["BG1"]);
        assert_eq!(data.bu, vec!["U1", "U2"]);
        assert_eq!(data.country, vec!["DE"]);
        assert_eq!(data.plant, vec!["P1", "P2"]);
    }

    #[test]
    fn deduplicates_and_sorts_every_dimension() {
        let rows = vec![
            row("BG2", "U1", "IN", "P9", 2023, 12),
            row("BG1", "U1", "DE", "P1", 2024, 2),
            row("BG2", "U1", "IN", "P9", 2023, 12),
            row("BG1", "U3", "DE", "P1", 2024, 1),
        ];

        let data = resolve(&rows);
        assert_eq!(data.bg, vec!["BG1", "BG2"]);
        assert_eq!(data.bu, vec!["U1", "U3"]);
        assert_eq!(data.country, vec!["DE", "IN"]);
        assert_eq!(data.plant, vec!["P1", "P9"]);
        assert_eq!(data.time, vec!["2023-12", "2024-01", "2024-02"]);
    }

    #[test]
    fn drops_null_and_empty_cells() {
        let rows = vec![
            FilterRow::new(None, Some(""), Some("DE"), None, 2024, 1),
            FilterRow::new(Some("BG1"), None, Some("DE"), Some("P1"), 2024, 1),
        ];

        let data = resolve(&rows);
        assert_eq!(data.bg, vec!["BG1"]);
        assert!(data.bu.is_empty());
        assert_eq!(data.country, vec!["DE"]);
        assert_eq!(data.plant, vec!["P1"]);
    }

    #[test]
    fn time_tokens_are_zero_padded_and_chronological() {
        let rows = vec![
            row("BG1", "U1", "DE", "P1", 2024, 10),
            row("BG1", "U1", "DE", "P1", 2024, 2),
            row("BG1", "U1", "DE", "P1", 2023, 11),
        ];

        let data = resolve(&rows);
        assert_eq!(data.time, vec!["2023-11", "2024-02", "2024-10"]);
    }

    #[test]
    fn empty_input_yields_empty_lists_not_an_error() {
        let data = resolve(&[]);
        assert_eq!(data, CascadeData::default());
    }

    #[test]
    fn resolution_is_deterministic() {
        let rows = vec![
            row("BG2", "U2", "IN", "P2", 2024, 3),
            row("BG1", "U1", "DE", "P1", 2024, 1),
        ];
        assert_eq!(resolve(&rows), resolve(&rows));
    }
}
