//! Utilities for fetching NWB files from the DANDI archive.
//!
//! Three independent pieces: a streaming file downloader ([`download`]),
//! an archive asset fetcher that resolves a dandiset path to a download
//! URL ([`dandi`]), and a file size reporter ([`utils`]).

pub mod dandi;
pub mod download;
pub mod logger;
pub mod utils;
