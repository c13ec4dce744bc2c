//! The pure view layer.
//!
//! Everything a card shows is computed here from `(record, is_favourite,
//! theme)`, with no terminal or widget types involved. The reconcilers — the
//! console printer in [`console`] and the TUI renderer — only lay out what
//! this module produces, so card content is testable on its own.

pub mod console;

use korimako_core::model::BirdRecord;
use korimako_core::taxonomy::{Theme, ThemeTier};

pub const FAVE_LABEL: &str = "Favourite";
pub const FAVE_HINT: &str = "Add this bird to favourites in the local store";
pub const UNFAVE_LABEL: &str = "Unfavourite";
pub const UNFAVE_HINT: &str = "Remove this bird from favourites in the local store";

/// The favourite/unfavourite toggle as shown on one card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaveButton {
    pub label: &'static str,
    pub hint: &'static str,
}

/// The status-coloured indicator on one card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indicator {
    pub style_token: &'static str,
    /// Hover text: the status label as found in the record.
    pub hint: String,
}

/// A label/value line of the card's attribute table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeRow {
    pub heading: &'static str,
    pub value: String,
}

/// One rendered card for one bird record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Infobox {
    pub card_class: &'static str,
    pub button: FaveButton,
    pub photo_source: String,
    pub credit: String,
    pub indicator: Indicator,
    pub header: String,
    pub rows: Vec<AttributeRow>,
}

/// Build the card for `bird`. Pure: equal inputs give an equal card, so
/// rendering twice never duplicates anything.
#[must_use]
pub fn build_infobox(bird: &BirdRecord, is_favourite: bool, theme: Theme) -> Infobox {
    let button = if is_favourite {
        FaveButton {
            label: UNFAVE_LABEL,
            hint: UNFAVE_HINT,
        }
    } else {
        FaveButton {
            label: FAVE_LABEL,
            hint: FAVE_HINT,
        }
    };

    let mut rows = Vec::new();
    push_row(&mut rows, "Original name", bird.original_name.clone());
    push_row(&mut rows, "Scientific name", bird.scientific_name.clone());
    push_row(&mut rows, "Other names", bird.other_name.join(", "));
    push_row(&mut rows, "Order", bird.order.clone());
    push_row(&mut rows, "Family", bird.family.clone());
    push_row(&mut rows, "Status", bird.status.label().to_string());
    push_row(&mut rows, "Length", bird.length.clone());
    push_row(&mut rows, "Weight", bird.weight.clone());

    Infobox {
        card_class: theme.token(ThemeTier::Card),
        button,
        photo_source: bird.photo.source.clone(),
        credit: format!("Credit: {}", bird.photo.credit),
        indicator: Indicator {
            style_token: bird.status.style_token(),
            hint: bird.status.label().to_string(),
        },
        header: bird.common_name.clone(),
        rows,
    }
}

/// Append a row unless its value is empty; blank rows are omitted rather
/// than rendered empty.
fn push_row(rows: &mut Vec<AttributeRow>, heading: &'static str, value: String) {
    if !value.is_empty() {
        rows.push(AttributeRow { heading, value });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use korimako_core::model::Photo;
    use korimako_core::taxonomy::{ConservationStatus, FALLBACK_STYLE_TOKEN};

    fn kea() -> BirdRecord {
        BirdRecord::new("Kea")
            .with_original_name("Kea")
            .with_scientific_name("Nestor notabilis")
            .with_order("Psittaciformes")
            .with_family("Strigopidae")
            .with_status(ConservationStatus::NationallyEndangered)
            .with_length("48 cm")
            .with_weight("800 g")
            .with_photo(Photo::new("images/kea.jpg", "J. Smith"))
    }

    #[test]
    fn test_building_twice_gives_an_equal_card() {
        let bird = kea();
        let first = build_infobox(&bird, false, Theme::Blue);
        let second = build_infobox(&bird, false, Theme::Blue);
        assert_eq!(first, second);
    }

    #[test]
    fn test_button_follows_favourite_state() {
        let bird = kea();

        let card = build_infobox(&bird, false, Theme::Blue);
        assert_eq!(card.button.label, FAVE_LABEL);
        assert_eq!(card.button.hint, FAVE_HINT);

        let card = build_infobox(&bird, true, Theme::Blue);
        assert_eq!(card.button.label, UNFAVE_LABEL);
        assert_eq!(card.button.hint, UNFAVE_HINT);
    }

    #[test]
    fn test_empty_rows_are_omitted_entirely() {
        let bird = BirdRecord::new("Weka").with_family("Rallidae");
        let card = build_infobox(&bird, false, Theme::Blue);

        let headings: Vec<&str> = card.rows.iter().map(|r| r.heading).collect();
        assert_eq!(headings, vec!["Family"]);
    }

    #[test]
    fn test_other_names_join_with_a_visible_separator() {
        let bird = BirdRecord::new("Morepork").with_other_names(["Ruru", "Boobook"]);
        let card = build_infobox(&bird, false, Theme::Blue);

        let row = card.rows.iter().find(|r| r.heading == "Other names").unwrap();
        assert_eq!(row.value, "Ruru, Boobook");
    }

    #[test]
    fn test_unrecognized_status_gets_the_error_indicator() {
        let bird = BirdRecord::new("Mystery").with_status(ConservationStatus::parse("Mythical"));
        let card = build_infobox(&bird, false, Theme::Blue);

        assert_eq!(card.indicator.style_token, FALLBACK_STYLE_TOKEN);
        assert_eq!(card.indicator.hint, "Mythical");
        // The status row still shows the raw label.
        let row = card.rows.iter().find(|r| r.heading == "Status").unwrap();
        assert_eq!(row.value, "Mythical");
    }

    #[test]
    fn test_card_class_follows_theme() {
        let bird = kea();
        assert_eq!(build_infobox(&bird, false, Theme::Blue).card_class, "blue-3");
        assert_eq!(build_infobox(&bird, false, Theme::Red).card_class, "red-3");
    }
}
