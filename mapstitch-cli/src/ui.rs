//! Terminal interaction: confirmation prompt and download progress.

use console::Term;
use dialoguer::Confirm;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use mapstitch::grid::TileGrid;
use mapstitch::stitch::TileProgress;

use crate::error::CliError;

/// Describes the pending download and asks whether to go ahead.
///
/// Returns `Ok(true)` without asking when `assume_yes` is set.
pub fn confirm_download(grid: &TileGrid, assume_yes: bool) -> Result<bool, CliError> {
    println!("{}", describe_grid(grid));

    if assume_yes {
        return Ok(true);
    }

    if !Term::stdout().is_term() {
        return Err(CliError::Prompt(
            "stdout is not a terminal; pass --yes to continue without confirmation".to_string(),
        ));
    }

    Confirm::new()
        .with_prompt("Do you want to continue")
        .default(true)
        .interact()
        .map_err(|e| CliError::Prompt(e.to_string()))
}

/// One-line summary of the tiles a grid will fetch.
pub fn describe_grid(grid: &TileGrid) -> String {
    let (width, height) = grid.canvas_size();
    let (tile_w, tile_h) = grid.request_size();
    format!(
        "Retrieve {} image tiles ({} columns × {} rows of {}x{}) from the Google static-maps API for a {}x{} image",
        grid.tile_count(),
        grid.columns(),
        grid.rows(),
        tile_w,
        tile_h,
        width,
        height
    )
}

/// Progress bar advanced once per stitched tile.
pub struct DownloadProgress {
    bar: ProgressBar,
}

impl DownloadProgress {
    pub fn new(total: usize) -> Self {
        let bar = ProgressBar::with_draw_target(Some(total as u64), ProgressDrawTarget::stdout());
        let style = ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} tiles {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("##-");
        bar.set_style(style);
        Self { bar }
    }

    pub fn update(&self, progress: TileProgress) {
        self.bar
            .set_message(format!("(column {}, row {})", progress.col, progress.row));
        self.bar.set_position(progress.completed as u64);
    }

    pub fn finish(&self) {
        self.bar.finish_with_message("done");
    }

    pub fn abandon(&self) {
        self.bar.abandon_with_message("failed");
    }
}
