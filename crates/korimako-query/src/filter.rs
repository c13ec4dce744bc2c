use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use korimako_core::model::BirdRecord;
use korimako_core::taxonomy::ConservationStatus;

use crate::order::SortOrder;

/// The conservation-status constraint of a search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusFilter {
    /// Every status matches.
    #[default]
    All,
    /// Only records with exactly this status match.
    Only(ConservationStatus),
}

/// One search, as read from the form when the user submits it. Rebuilt on
/// every submit; never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub text: String,
    pub status: StatusFilter,
    pub order: SortOrder,
}

/// Canonical text normalization for name matching: NFC plus Unicode
/// lowercasing, applied identically to the query and to every candidate
/// name, so "KĀKĀ" and "kākā" compare equal.
#[must_use]
pub fn normalize(input: &str) -> String {
    input.nfc().collect::<String>().to_lowercase()
}

/// True iff `bird` satisfies both the text and the status constraints of
/// `query`.
#[must_use]
pub fn matches(bird: &BirdRecord, query: &SearchQuery) -> bool {
    matches_text(bird, &query.text) && matches_status(bird, &query.status)
}

/// Empty query text matches every record; otherwise the normalized text
/// must be a substring of one of the bird's names. A name the record lacks
/// simply never matches.
fn matches_text(bird: &BirdRecord, text: &str) -> bool {
    if text.is_empty() {
        return true;
    }
    let needle = normalize(text);

    if normalize(&bird.common_name).contains(&needle) {
        return true;
    }
    if normalize(&bird.original_name).contains(&needle) {
        return true;
    }
    if normalize(&bird.scientific_name).contains(&needle) {
        return true;
    }
    bird.other_name
        .iter()
        .any(|name| normalize(name).contains(&needle))
}

fn matches_status(bird: &BirdRecord, filter: &StatusFilter) -> bool {
    match filter {
        StatusFilter::All => true,
        StatusFilter::Only(status) => bird.status == *status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kea() -> BirdRecord {
        BirdRecord::new("Kea")
            .with_scientific_name("Nestor notabilis")
            .with_status(ConservationStatus::NationallyEndangered)
    }

    fn query(text: &str, status: StatusFilter) -> SearchQuery {
        SearchQuery {
            text: text.to_string(),
            status,
            order: SortOrder::Alphabetical,
        }
    }

    #[test]
    fn test_empty_text_depends_only_on_status() {
        let bird = kea();
        assert!(matches(&bird, &query("", StatusFilter::All)));
        assert!(matches(
            &bird,
            &query(
                "",
                StatusFilter::Only(ConservationStatus::NationallyEndangered)
            )
        ));
        assert!(!matches(
            &bird,
            &query("", StatusFilter::Only(ConservationStatus::Relict))
        ));
    }

    #[test]
    fn test_text_match_is_case_insensitive() {
        let bird = kea();
        assert!(matches(&bird, &query("kea", StatusFilter::All)));
        assert!(matches(&bird, &query("KEA", StatusFilter::All)));
        assert!(matches(&bird, &query("notabilis", StatusFilter::All)));
        assert!(!matches(&bird, &query("kakapo", StatusFilter::All)));
    }

    #[test]
    fn test_text_match_is_normalization_insensitive() {
        // "Kākā" with the macrons precomposed vs. built from combining marks.
        let bird = BirdRecord::new("K\u{101}k\u{101}");
        assert!(matches(
            &bird,
            &query("ka\u{304}ka\u{304}", StatusFilter::All)
        ));
        assert!(matches(&bird, &query("K\u{100}K\u{100}", StatusFilter::All)));
    }

    #[test]
    fn test_other_names_are_searched() {
        let bird = BirdRecord::new("Morepork").with_other_names(["Ruru", "Boobook"]);
        assert!(matches(&bird, &query("ruru", StatusFilter::All)));
        assert!(matches(&bird, &query("boo", StatusFilter::All)));
    }

    #[test]
    fn test_missing_fields_are_non_matching() {
        // No scientific or original name: only the common name can match.
        let bird = BirdRecord::new("Weka");
        assert!(matches(&bird, &query("weka", StatusFilter::All)));
        assert!(!matches(&bird, &query("gallirallus", StatusFilter::All)));
    }

    #[test]
    fn test_both_constraints_must_hold() {
        let bird = kea();
        assert!(matches(
            &bird,
            &query(
                "kea",
                StatusFilter::Only(ConservationStatus::NationallyEndangered)
            )
        ));
        assert!(!matches(
            &bird,
            &query("kea", StatusFilter::Only(ConservationStatus::Extinct))
        ));
    }
}
