use serde::{Deserialize, Serialize};

/// A photograph of a bird, with attribution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    /// Image location, as given by the dataset (a URL or relative path).
    #[serde(default)]
    pub source: String,

    /// Photographer or rights holder to credit alongside the image.
    #[serde(default)]
    pub credit: String,
}

impl Photo {
    #[must_use]
    pub fn new(source: impl Into<String>, credit: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            credit: credit.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_photo_new() {
        let photo = Photo::new("images/kea.jpg", "J. Smith");
        assert_eq!(photo.source, "images/kea.jpg");
        assert_eq!(photo.credit, "J. Smith");
    }

    #[test]
    fn test_photo_default_is_empty() {
        let photo = Photo::default();
        assert!(photo.source.is_empty());
        assert!(photo.credit.is_empty());
    }
}
