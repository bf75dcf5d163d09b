//! mapstitch CLI - Command-line interface
//!
//! Downloads the satellite tiles covering a bounding box and saves them as
//! one stitched image.

mod args;
mod error;
mod ui;

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use mapstitch::config::{api_key_from_env, StitchConfig};
use mapstitch::grid::{GridConfig, TileGrid};
use mapstitch::logging::{self, LogSettings};
use mapstitch::output::{save_image, show_image, OutputFormat};
use mapstitch::provider::{ReqwestClient, StaticMapsProvider};
use mapstitch::stitch::Stitcher;
use tracing::{debug, error, info, warn};

use crate::args::Args;
use crate::error::CliError;
use crate::ui::DownloadProgress;

fn main() -> ExitCode {
    let args = Args::parse();

    let settings = LogSettings {
        debug: args.debug,
        log_file: args.logfile.clone(),
    };
    let _log_guard = match logging::init(&settings) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            report_failure(&e, &mut io::stderr());
            ExitCode::FAILURE
        }
    }
}

/// Prints the fatal error to `out` so it shows even when logging is filtered off.
fn report_failure(err: &CliError, out: &mut impl Write) {
    let _ = writeln!(out, "Error: {}", err);
}

fn run(args: Args) -> Result<(), CliError> {
    debug!(?args, "Command-line options");

    let api_key = api_key_from_env()?;
    let bbox = args.bounding_box()?;

    let config = StitchConfig {
        grid: GridConfig {
            scale: args.scale,
            ..GridConfig::default()
        },
        delay: args.delay,
        format: OutputFormat::from(args.format),
        ..StitchConfig::default()
    };

    let grid = TileGrid::new(&bbox, args.zoom, &config.grid)?;
    debug!(
        columns = grid.columns(),
        rows = grid.rows(),
        total_width = grid.total_width(),
        total_height = grid.total_height(),
        "Computed tile grid"
    );

    if !ui::confirm_download(&grid, args.yes)? {
        info!("Download cancelled");
        return Ok(());
    }

    let client = ReqwestClient::with_timeout(config.timeout)?;
    let provider = StaticMapsProvider::with_endpoint(client, api_key, config.endpoint.clone());
    let stitcher = Stitcher::new(config.delay);

    let progress = DownloadProgress::new(grid.tile_count());
    let image = match stitcher.run_with_progress(&grid, &provider, |p| progress.update(p)) {
        Ok(image) => {
            progress.finish();
            image
        }
        Err(e) => {
            progress.abandon();
            return Err(e.into());
        }
    };

    let path = save_image(&image, &args.output_dir, config.format)?;
    println!("Saved {}", path.display());

    if !args.no_show {
        if let Err(e) = show_image(&path) {
            warn!("{}", e);
        }
    }

    Ok(())
}
