use thiserror::Error;

/// Errors from the DANDI archive lookup. These propagate to the caller
/// unmodified; only the transfer itself reports failure as a value.
#[derive(Error, Debug)]
pub enum DandiError {
    #[error("Request to DANDI archive failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API token contains invalid header characters")]
    InvalidToken,

    #[error("Invalid archive URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Dandiset {dandiset_id} has no version '{version}'")]
    VersionNotFound {
        dandiset_id: String,
        version: String,
    },

    #[error("No asset at path '{path}' in dandiset {dandiset_id}/{version}")]
    AssetNotFound {
        dandiset_id: String,
        version: String,
        path: String,
    },
}
