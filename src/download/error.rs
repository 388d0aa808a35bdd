use reqwest::StatusCode;
use thiserror::Error;
use tokio::io;

/// Errors raised while streaming a body to disk.
#[derive(Error, Debug)]
pub enum DownloadError {
    #[error("Http request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP status code: {0}")]
    HttpStatus(StatusCode),

    #[error("IOError: {0}")]
    Io(#[from] io::Error),
}
