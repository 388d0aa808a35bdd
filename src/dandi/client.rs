//!
//! # DANDI archive API client
//!
//! Just enough of the archive REST API to turn a dandiset id, version and
//! in-dataset path into the asset's base download URL.

use std::fmt;

use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Client, StatusCode};
use url::Url;

use super::error::DandiError;
use super::types::{AssetPage, AssetSummary};

pub const DANDI_API_URL: &str = "https://api-staging.dandiarchive.org/api";

/// Client scoped to one archive instance and one access token. The token
/// travels as a default `Authorization` header and is marked sensitive;
/// it never shows up in logs or `Debug` output.
pub struct DandiClient {
    http: Client,
    api_url: Url,
}

impl fmt::Debug for DandiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DandiClient")
            .field("api_url", &self.api_url.as_str())
            .finish_non_exhaustive()
    }
}

impl DandiClient {
    pub fn new(token: &str) -> Result<Self, DandiError> {
        Self::with_api_url(DANDI_API_URL, token)
    }

    pub fn with_api_url(api_url: &str, token: &str) -> Result<Self, DandiError> {
        let mut auth = HeaderValue::from_str(&format!("token {token}"))
            .map_err(|_| DandiError::InvalidToken)?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let http = Client::builder().default_headers(headers).build()?;
        let api_url = Url::parse(api_url)?;

        Ok(Self { http, api_url })
    }

    /// Resolve the canonical base download URL of the asset at
    /// `asset_path` inside the given dandiset version.
    pub async fn asset_download_url(
        &self,
        dandiset_id: &str,
        version: &str,
        asset_path: &str,
    ) -> Result<Url, DandiError> {
        self.ensure_version(dandiset_id, version).await?;
        let asset = self.asset_by_path(dandiset_id, version, asset_path).await?;

        debug!(
            "Resolved asset {} for {}/{}:{}",
            asset.asset_id, dandiset_id, version, asset.path
        );

        let url = format!("{}/assets/{}/download/", self.api_url, asset.asset_id);
        Ok(Url::parse(&url)?)
    }

    async fn ensure_version(&self, dandiset_id: &str, version: &str) -> Result<(), DandiError> {
        let url = format!(
            "{}/dandisets/{}/versions/{}/info/",
            self.api_url, dandiset_id, version
        );
        let response = self.http.get(&url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(DandiError::VersionNotFound {
                dandiset_id: dandiset_id.to_string(),
                version: version.to_string(),
            });
        }
        response.error_for_status()?;

        Ok(())
    }

    /// Walk the paginated asset listing until a path matches exactly.
    /// The `path` query parameter is only a prefix filter on the archive
    /// side, so each page still has to be checked for an exact match.
    async fn asset_by_path(
        &self,
        dandiset_id: &str,
        version: &str,
        asset_path: &str,
    ) -> Result<AssetSummary, DandiError> {
        let listing_url = format!(
            "{}/dandisets/{}/versions/{}/assets/",
            self.api_url, dandiset_id, version
        );
        let mut page: AssetPage = self
            .http
            .get(&listing_url)
            .query(&[("path", asset_path), ("order", "path")])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        loop {
            if let Some(asset) = page.results.iter().find(|a| a.path == asset_path) {
                return Ok(asset.clone());
            }

            match page.next.take() {
                Some(next) => {
                    page = self
                        .http
                        .get(next)
                        .send()
                        .await?
                        .error_for_status()?
                        .json()
                        .await?;
                }
                None => {
                    return Err(DandiError::AssetNotFound {
                        dandiset_id: dandiset_id.to_string(),
                        version: version.to_string(),
                        path: asset_path.to_string(),
                    })
                }
            }
        }
    }
}
