use std::path::Path;

use korimako_core::model::BirdRecord;

use crate::error::DataError;

/// The fixed relative path of the bird dataset document.
pub const DEFAULT_DATASET: &str = "nzbird.json";

/// Read and parse the bird dataset at `path`.
///
/// The document is an ordered array of bird records; source order is
/// preserved, and no validation beyond deserialization is performed (in
/// particular, duplicate common names are not rejected).
pub async fn load_dataset(path: &Path) -> Result<Vec<BirdRecord>, DataError> {
    log::debug!("Loading bird dataset from {}", path.display());

    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| DataError::Fetch {
            path: path.to_path_buf(),
            source,
        })?;

    let records: Vec<BirdRecord> =
        serde_json::from_slice(&bytes).map_err(|source| DataError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    log::info!(
        "Loaded {} bird records from {}",
        records.len(),
        path.display()
    );
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    use korimako_core::taxonomy::ConservationStatus;

    fn write_dataset(dir: &tempfile::TempDir, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join("nzbird.json");
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[tokio::test]
    async fn test_load_preserves_source_order() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_dataset(
            &dir,
            r#"[
                {"common_name": "Weka", "status": "Not Threatened"},
                {"common_name": "Kea", "status": "Nationally Endangered"}
            ]"#,
        );

        let records = load_dataset(&path).await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].common_name, "Weka");
        assert_eq!(records[1].common_name, "Kea");
        assert_eq!(records[1].status, ConservationStatus::NationallyEndangered);
    }

    #[tokio::test]
    async fn test_load_tolerates_missing_optional_fields() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_dataset(&dir, r#"[{"common_name": "Takahē"}]"#);

        let records = load_dataset(&path).await.unwrap();
        assert_eq!(records[0].common_name, "Takahē");
        assert!(records[0].other_name.is_empty());
        assert!(records[0].photo.credit.is_empty());
    }

    #[tokio::test]
    async fn test_missing_document_is_a_fetch_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("absent.json");

        let err = load_dataset(&path).await.unwrap_err();
        assert!(matches!(err, DataError::Fetch { .. }));
        assert!(err.to_string().contains("could not be retrieved"));
    }

    #[tokio::test]
    async fn test_malformed_document_is_a_parse_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_dataset(&dir, "{ not json ]");

        let err = load_dataset(&path).await.unwrap_err();
        assert!(matches!(err, DataError::Parse { .. }));
    }
}
