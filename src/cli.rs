use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct CliArgs {
    /// Also append log output to this file
    #[arg(long)]
    pub log_file: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Download a file from a URL
    Download { url: String, dest: PathBuf },

    /// Resolve an asset in a dandiset's draft version and download it
    Fetch {
        dandiset_id: String,
        asset_path: String,
        dest: PathBuf,
        /// DANDI API access token
        #[arg(long)]
        token: String,
    },

    /// Print the size of a local file in megabytes
    Size { path: PathBuf },
}
