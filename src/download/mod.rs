//!
//! # Streaming file download
//!
//! Writes an HTTP body to disk chunk by chunk without buffering it whole.
//! Failures are reported as a [`DownloadOutcome`] value and logged; this
//! function never returns `Err`, so a tutorial driver can keep going after
//! a bad URL.

pub mod error;

use std::path::{Path, PathBuf};

use futures_util::StreamExt;
use log::{error, info};
use reqwest::{Client, Response, StatusCode};
use tokio::fs;
use tokio::io::{AsyncWriteExt, BufWriter};

use error::DownloadError;

const WRITE_BUFFER_SIZE: usize = 8192;

/// How a download attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    Completed,
    HttpFailure(StatusCode),
    TransportError(String),
}

impl DownloadOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, DownloadOutcome::Completed)
    }
}

/// Stream the body at `url` into `dest`.
///
/// A non-success status or transport error is logged and returned in the
/// outcome; `dest` is only ever created on full success.
pub async fn download_file(client: &Client, url: &str, dest: &Path) -> DownloadOutcome {
    match stream_to_file(client, url, dest).await {
        Ok(()) => {
            info!("File downloaded successfully to {}", dest.display());
            DownloadOutcome::Completed
        }
        Err(DownloadError::HttpStatus(status)) => {
            error!("Failed to download file. HTTP status code: {}", status);
            DownloadOutcome::HttpFailure(status)
        }
        Err(err) => {
            error!("An error occurred: {}", err);
            DownloadOutcome::TransportError(err.to_string())
        }
    }
}

async fn stream_to_file(client: &Client, url: &str, dest: &Path) -> Result<(), DownloadError> {
    let response = client.get(url).send().await?;

    if !response.status().is_success() {
        return Err(DownloadError::HttpStatus(response.status()));
    }

    // Write to a sibling `.part` path and rename at the end, so an
    // interrupted stream never leaves a truncated file at `dest`.
    let part_path = partial_path(dest);
    match write_body(response, &part_path).await {
        Ok(()) => {
            fs::rename(&part_path, dest).await?;
            Ok(())
        }
        Err(err) => {
            let _ = fs::remove_file(&part_path).await;
            Err(err)
        }
    }
}

async fn write_body(response: Response, path: &Path) -> Result<(), DownloadError> {
    let file = fs::File::create(path).await?;
    let mut writer = BufWriter::with_capacity(WRITE_BUFFER_SIZE, file);
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        writer.write_all(&chunk?).await?;
    }
    writer.flush().await?;

    Ok(())
}

fn partial_path(dest: &Path) -> PathBuf {
    let mut name = dest
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".part");
    dest.with_file_name(name)
}
