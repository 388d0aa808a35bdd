use std::path::Path;

use thiserror::Error;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// The stat failed, almost always because the path does not exist. The
/// OS error text is kept verbatim.
#[derive(Error, Debug)]
#[error("File not found: {0}")]
pub struct FileSizeError(#[from] std::io::Error);

/// Size of the file at `path` in megabytes, rounded to two decimals.
pub fn file_size_in_mb(path: impl AsRef<Path>) -> Result<f64, FileSizeError> {
    let bytes = std::fs::metadata(path.as_ref())?.len();
    Ok(round2(bytes as f64 / BYTES_PER_MB))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
