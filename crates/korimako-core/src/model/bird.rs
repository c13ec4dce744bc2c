use serde::{Deserialize, Deserializer, Serialize};

use crate::model::Photo;
use crate::taxonomy::ConservationStatus;

/// A single bird species record from the dataset.
///
/// `common_name` is the sole identity used for favouriting. The dataset is
/// trusted to keep it unique; no validation is performed here and colliding
/// names silently share one favourite entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirdRecord {
    pub common_name: String,

    /// Name in te reo Māori, where one exists.
    #[serde(default)]
    pub original_name: String,

    #[serde(default)]
    pub scientific_name: String,

    /// Alternative names, in dataset order.
    #[serde(default)]
    pub other_name: Vec<String>,

    #[serde(default)]
    pub order: String,

    #[serde(default)]
    pub family: String,

    #[serde(default)]
    pub status: ConservationStatus,

    /// Typical length, as printed on the card (e.g. "48 cm").
    #[serde(default, deserialize_with = "string_or_number")]
    pub length: String,

    /// Typical weight, as printed on the card.
    #[serde(default, deserialize_with = "string_or_number")]
    pub weight: String,

    #[serde(default)]
    pub photo: Photo,
}

/// The dataset writes length and weight sometimes as strings, sometimes as
/// bare numbers. Both are carried as display strings.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Int(n) => n.to_string(),
        Raw::Float(n) => n.to_string(),
    })
}

impl BirdRecord {
    #[must_use]
    pub fn new(common_name: impl Into<String>) -> Self {
        Self {
            common_name: common_name.into(),
            original_name: String::new(),
            scientific_name: String::new(),
            other_name: Vec::new(),
            order: String::new(),
            family: String::new(),
            status: ConservationStatus::default(),
            length: String::new(),
            weight: String::new(),
            photo: Photo::default(),
        }
    }

    #[must_use]
    pub fn with_original_name(mut self, name: impl Into<String>) -> Self {
        self.original_name = name.into();
        self
    }

    #[must_use]
    pub fn with_scientific_name(mut self, name: impl Into<String>) -> Self {
        self.scientific_name = name.into();
        self
    }

    #[must_use]
    pub fn with_other_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.other_name = names.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_order(mut self, order: impl Into<String>) -> Self {
        self.order = order.into();
        self
    }

    #[must_use]
    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.family = family.into();
        self
    }

    #[must_use]
    pub fn with_status(mut self, status: ConservationStatus) -> Self {
        self.status = status;
        self
    }

    #[must_use]
    pub fn with_length(mut self, length: impl Into<String>) -> Self {
        self.length = length.into();
        self
    }

    #[must_use]
    pub fn with_weight(mut self, weight: impl Into<String>) -> Self {
        self.weight = weight.into();
        self
    }

    #[must_use]
    pub fn with_photo(mut self, photo: Photo) -> Self {
        self.photo = photo;
        self
    }
}
