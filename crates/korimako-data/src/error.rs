use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while retrieving or parsing the bird dataset.
///
/// Either variant is surfaced to the user with its underlying detail; there
/// is no retry, and whatever was rendered before the failed fetch stays
/// visible.
#[derive(Debug, Error)]
pub enum DataError {
    /// The dataset document could not be read.
    #[error("bird data could not be retrieved from {}: {}", path.display(), source)]
    Fetch {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The dataset document was read but does not parse as bird records.
    #[error("bird data at {} could not be parsed: {}", path.display(), source)]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
