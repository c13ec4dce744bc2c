use serde::{Deserialize, Serialize};

use korimako_core::model::BirdRecord;
use korimako_core::taxonomy::ConservationStatus;

use crate::filter::{matches, SearchQuery, StatusFilter};

/// How search results are ordered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    /// Keep dataset order (the document lists species alphabetically).
    #[default]
    Alphabetical,
    /// Group results by the fixed conservation-status ordering.
    ConservationStatus,
}

/// Apply `query` to `records`: filter, then order per the sort policy.
///
/// Grouping by status is only meaningful when every status is visible, so
/// it applies only with the `All` status filter; with a single-status
/// filter grouping would be a no-op and results keep dataset order. Within
/// a group the original relative order is preserved. Records whose status
/// is outside the vocabulary have no rank and are not emitted in grouped
/// mode.
#[must_use]
pub fn arrange<'a>(records: &'a [BirdRecord], query: &SearchQuery) -> Vec<&'a BirdRecord> {
    if query.order == SortOrder::ConservationStatus && query.status == StatusFilter::All {
        let mut grouped = Vec::new();
        for status in &ConservationStatus::ALL {
            grouped.extend(
                records
                    .iter()
                    .filter(|bird| bird.status == *status && matches(bird, query)),
            );
        }
        grouped
    } else {
        records
            .iter()
            .filter(|bird| matches(bird, query))
            .collect()
    }
}

/// The show-favourites arrangement: keep records whose common name is
/// favourited, sorted alphabetically by common name. The current search
/// filters are ignored by design.
#[must_use]
pub fn arrange_favourites<'a>(
    records: &'a [BirdRecord],
    favourites: &[String],
) -> Vec<&'a BirdRecord> {
    let mut kept: Vec<&BirdRecord> = records
        .iter()
        .filter(|bird| favourites.contains(&bird.common_name))
        .collect();
    kept.sort_by(|a, b| a.common_name.cmp(&b.common_name));
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> Vec<BirdRecord> {
        vec![
            BirdRecord::new("Kea").with_status(ConservationStatus::NationallyEndangered),
            BirdRecord::new("Weka").with_status(ConservationStatus::NotThreatened),
            BirdRecord::new("Rock Wren").with_status(ConservationStatus::NationallyEndangered),
            BirdRecord::new("Huia").with_status(ConservationStatus::Extinct),
            BirdRecord::new("Morepork").with_status(ConservationStatus::NotThreatened),
        ]
    }

    fn names(results: &[&BirdRecord]) -> Vec<String> {
        results.iter().map(|b| b.common_name.clone()).collect()
    }

    #[test]
    fn test_default_order_keeps_dataset_order() {
        let records = dataset();
        let query = SearchQuery::default();

        let results = arrange(&records, &query);
        assert_eq!(
            names(&results),
            vec!["Kea", "Weka", "Rock Wren", "Huia", "Morepork"]
        );
    }

    #[test]
    fn test_grouped_order_is_non_decreasing_and_stable() {
        let records = dataset();
        let query = SearchQuery {
            order: SortOrder::ConservationStatus,
            ..SearchQuery::default()
        };

        let results = arrange(&records, &query);
        // Non-decreasing rank, with dataset order preserved inside a group.
        assert_eq!(
            names(&results),
            vec!["Weka", "Morepork", "Kea", "Rock Wren", "Huia"]
        );

        let ranks: Vec<usize> = results.iter().filter_map(|b| b.status.rank()).collect();
        let mut sorted = ranks.clone();
        sorted.sort_unstable();
        assert_eq!(ranks, sorted);
    }

    #[test]
    fn test_grouping_is_skipped_under_a_single_status_filter() {
        let records = dataset();
        let query = SearchQuery {
            status: StatusFilter::Only(ConservationStatus::NotThreatened),
            order: SortOrder::ConservationStatus,
            ..SearchQuery::default()
        };

        let results = arrange(&records, &query);
        assert_eq!(names(&results), vec!["Weka", "Morepork"]);
    }

    #[test]
    fn test_grouped_mode_omits_unrecognized_statuses() {
        let mut records = dataset();
        records.push(BirdRecord::new("Mystery").with_status(ConservationStatus::parse("Mythical")));

        let grouped = arrange(
            &records,
            &SearchQuery {
                order: SortOrder::ConservationStatus,
                ..SearchQuery::default()
            },
        );
        assert!(!names(&grouped).contains(&"Mystery".to_string()));

        // Dataset order still shows it.
        let flat = arrange(&records, &SearchQuery::default());
        assert!(names(&flat).contains(&"Mystery".to_string()));
    }

    #[test]
    fn test_text_filter_applies_in_both_modes() {
        let records = dataset();
        let query = SearchQuery {
            text: "we".to_string(),
            order: SortOrder::ConservationStatus,
            ..SearchQuery::default()
        };

        let results = arrange(&records, &query);
        assert_eq!(names(&results), vec!["Weka"]);
    }

    #[test]
    fn test_favourites_are_alphabetical_and_ignore_filters() {
        let records = dataset();
        let favourites = vec!["Weka".to_string(), "Huia".to_string(), "Kea".to_string()];

        let results = arrange_favourites(&records, &favourites);
        assert_eq!(names(&results), vec!["Huia", "Kea", "Weka"]);
    }

    #[test]
    fn test_no_favourites_means_no_results() {
        let records = dataset();
        let results = arrange_favourites(&records, &[]);
        assert!(results.is_empty());
    }
}
