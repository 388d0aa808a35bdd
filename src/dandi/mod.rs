//!
//! # DANDI archive asset fetcher
//!

pub mod client;
pub mod error;
pub mod types;

use std::path::Path;

use reqwest::Client;

pub use client::{DandiClient, DANDI_API_URL};
pub use error::DandiError;

use crate::download::{download_file, DownloadOutcome};

/// Resolve `asset_path` in the dandiset's draft version and download it
/// to `dest`.
///
/// The archive client only lives for the lookup scope; it is dropped
/// before the transfer starts. Lookup errors propagate to the caller,
/// while the transfer itself reports through the returned outcome.
pub async fn fetch_nwb_file(
    dandiset_id: &str,
    asset_path: &str,
    token: &str,
    dest: &Path,
) -> Result<DownloadOutcome, DandiError> {
    let download_url = {
        let client = DandiClient::new(token)?;
        client
            .asset_download_url(dandiset_id, "draft", asset_path)
            .await?
    };

    Ok(download_file(&Client::new(), download_url.as_str(), dest).await)
}

/// Variant of [`fetch_nwb_file`] against a non-default archive instance.
pub async fn fetch_nwb_file_from(
    api_url: &str,
    dandiset_id: &str,
    asset_path: &str,
    token: &str,
    dest: &Path,
) -> Result<DownloadOutcome, DandiError> {
    let download_url = {
        let client = DandiClient::with_api_url(api_url, token)?;
        client
            .asset_download_url(dandiset_id, "draft", asset_path)
            .await?
    };

    Ok(download_file(&Client::new(), download_url.as_str(), dest).await)
}

#[cfg(test)]
mod tests {
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::json;
    use tempfile::tempdir;

    use super::*;

    const PAYLOAD: &[u8] = b"\x89HDF\r\n\x1a\n pretend-nwb-content";

    #[tokio::test]
    async fn resolves_and_downloads_through_the_archive() {
        let app = Router::new()
            .route(
                "/api/dandisets/000123/versions/draft/info/",
                get(|| async { Json(json!({"version": "draft", "asset_count": 1})) }),
            )
            .route(
                "/api/dandisets/000123/versions/draft/assets/",
                get(|| async {
                    Json(json!({
                        "count": 1,
                        "next": null,
                        "results": [{"asset_id": "abc-123", "path": "sub-01/sub-01_ecephys.nwb"}]
                    }))
                }),
            )
            .route("/api/assets/abc-123/download/", get(|| async { PAYLOAD }));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let dir = tempdir().unwrap();
        let dest = dir.path().join("local.nwb");
        let outcome = fetch_nwb_file_from(
            &format!("http://{}/api", addr),
            "000123",
            "sub-01/sub-01_ecephys.nwb",
            "secret",
            &dest,
        )
        .await
        .unwrap();

        assert!(outcome.is_completed());
        assert_eq!(std::fs::read(&dest).unwrap(), PAYLOAD);
    }
}
