use std::fmt;

use serde::{Deserialize, Serialize};

/// A conservation status from the New Zealand Threat Classification System.
///
/// The eleven named variants are listed in the fixed display ordering, from
/// least to most at risk; grouped rendering walks [`ConservationStatus::ALL`]
/// in that order. A label outside the vocabulary is preserved verbatim in
/// [`ConservationStatus::Unrecognized`] so it can still be displayed (with
/// the error indicator) rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ConservationStatus {
    NotThreatened,
    NaturallyUncommon,
    Relict,
    Recovering,
    Declining,
    NationallyIncreasing,
    NationallyVulnerable,
    NationallyEndangered,
    NationallyCritical,
    Extinct,
    DataDeficient,
    /// A label outside the fixed vocabulary, kept as-is.
    Unrecognized(String),
}

/// Indicator style token per status. Extinct and Data Deficient share the
/// black indicator, matching the published classification charts.
const STYLE_TOKENS: &[(ConservationStatus, &str)] = &[
    (ConservationStatus::NotThreatened, "col-nt"),
    (ConservationStatus::NaturallyUncommon, "col-nu"),
    (ConservationStatus::Relict, "col-rl"),
    (ConservationStatus::Recovering, "col-rc"),
    (ConservationStatus::Declining, "col-dc"),
    (ConservationStatus::NationallyIncreasing, "col-ni"),
    (ConservationStatus::NationallyVulnerable, "col-nv"),
    (ConservationStatus::NationallyEndangered, "col-ne"),
    (ConservationStatus::NationallyCritical, "col-nc"),
    (ConservationStatus::Extinct, "col-black"),
    (ConservationStatus::DataDeficient, "col-black"),
];

/// Style token for any status outside the fixed vocabulary.
pub const FALLBACK_STYLE_TOKEN: &str = "col-error";

impl ConservationStatus {
    /// The fixed display ordering, least to most at risk.
    pub const ALL: [Self; 11] = [
        Self::NotThreatened,
        Self::NaturallyUncommon,
        Self::Relict,
        Self::Recovering,
        Self::Declining,
        Self::NationallyIncreasing,
        Self::NationallyVulnerable,
        Self::NationallyEndangered,
        Self::NationallyCritical,
        Self::Extinct,
        Self::DataDeficient,
    ];

    /// Parse a vocabulary label; anything else becomes `Unrecognized`.
    #[must_use]
    pub fn parse(label: &str) -> Self {
        match label {
            "Not Threatened" => Self::NotThreatened,
            "Naturally Uncommon" => Self::NaturallyUncommon,
            "Relict" => Self::Relict,
            "Recovering" => Self::Recovering,
            "Declining" => Self::Declining,
            "Nationally Increasing" => Self::NationallyIncreasing,
            "Nationally Vulnerable" => Self::NationallyVulnerable,
            "Nationally Endangered" => Self::NationallyEndangered,
            "Nationally Critical" => Self::NationallyCritical,
            "Extinct" => Self::Extinct,
            "Data Deficient" => Self::DataDeficient,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    /// The display label for this status.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::NotThreatened => "Not Threatened",
            Self::NaturallyUncommon => "Naturally Uncommon",
            Self::Relict => "Relict",
            Self::Recovering => "Recovering",
            Self::Declining => "Declining",
            Self::NationallyIncreasing => "Nationally Increasing",
            Self::NationallyVulnerable => "Nationally Vulnerable",
            Self::NationallyEndangered => "Nationally Endangered",
            Self::NationallyCritical => "Nationally Critical",
            Self::Extinct => "Extinct",
            Self::DataDeficient => "Data Deficient",
            Self::Unrecognized(raw) => raw,
        }
    }

    /// Position in the fixed display ordering; `None` for unrecognized
    /// labels, which have no place in grouped output.
    #[must_use]
    pub fn rank(&self) -> Option<usize> {
        Self::ALL.iter().position(|status| status == self)
    }

    /// The indicator style token for this status, falling back to
    /// [`FALLBACK_STYLE_TOKEN`] for anything outside the vocabulary.
    #[must_use]
    pub fn style_token(&self) -> &'static str {
        for (status, token) in STYLE_TOKENS {
            if status == self {
                return token;
            }
        }
        FALLBACK_STYLE_TOKEN
    }
}

impl Default for ConservationStatus {
    fn default() -> Self {
        Self::Unrecognized(String::new())
    }
}

impl From<String> for ConservationStatus {
    fn from(label: String) -> Self {
        Self::parse(&label)
    }
}

impl From<ConservationStatus> for String {
    fn from(status: ConservationStatus) -> Self {
        status.label().to_string()
    }
}

impl fmt::Display for ConservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_every_label() {
        for status in &ConservationStatus::ALL {
            assert_eq!(ConservationStatus::parse(status.label()), *status);
        }
    }

    #[test]
    fn test_rank_follows_display_order() {
        assert_eq!(ConservationStatus::NotThreatened.rank(), Some(0));
        assert_eq!(ConservationStatus::DataDeficient.rank(), Some(10));
        assert!(
            ConservationStatus::Declining.rank() < ConservationStatus::NationallyCritical.rank()
        );
    }

    #[test]
    fn test_unrecognized_keeps_raw_label() {
        let status = ConservationStatus::parse("Mythical");
        assert_eq!(status.label(), "Mythical");
        assert_eq!(status.rank(), None);
    }

    #[test]
    fn test_style_tokens() {
        assert_eq!(ConservationStatus::NotThreatened.style_token(), "col-nt");
        assert_eq!(ConservationStatus::Extinct.style_token(), "col-black");
        assert_eq!(ConservationStatus::DataDeficient.style_token(), "col-black");
    }

    #[test]
    fn test_unrecognized_gets_fallback_token() {
        let status = ConservationStatus::parse("Mythical");
        assert_eq!(status.style_token(), FALLBACK_STYLE_TOKEN);
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_string(&ConservationStatus::NationallyVulnerable).unwrap();
        assert_eq!(json, r#""Nationally Vulnerable""#);

        let status: ConservationStatus = serde_json::from_str(r#""Relict""#).unwrap();
        assert_eq!(status, ConservationStatus::Relict);
    }
}
