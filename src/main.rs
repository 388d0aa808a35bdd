use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use nwbfetch::download::{download_file, DownloadOutcome};
use nwbfetch::{dandi, logger, utils};

mod cli;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = cli::CliArgs::parse();
    logger::setup_logger(args.log_file.as_deref())?;

    let outcome = match args.command {
        cli::Command::Download { url, dest } => {
            download_file(&reqwest::Client::new(), &url, &dest).await
        }
        cli::Command::Fetch {
            dandiset_id,
            asset_path,
            dest,
            token,
        } => dandi::fetch_nwb_file(&dandiset_id, &asset_path, &token, &dest).await?,
        cli::Command::Size { path } => {
            let size_mb = utils::file_size_in_mb(&path)?;
            println!("{:.2}", size_mb);
            return Ok(ExitCode::SUCCESS);
        }
    };

    Ok(match outcome {
        DownloadOutcome::Completed => ExitCode::SUCCESS,
        DownloadOutcome::HttpFailure(_) | DownloadOutcome::TransportError(_) => ExitCode::FAILURE,
    })
}
