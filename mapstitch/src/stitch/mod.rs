//! Sequential tile fetching and stitching
//!
//! Walks a [`TileGrid`] one tile at a time, fetches each tile from a
//! [`TileSource`], crops its logo band and pastes it into a [`Canvas`].
//! A fixed delay separates consecutive requests to stay within the
//! provider's rate limits. The first failure aborts the whole run.

mod canvas;
mod types;

pub use canvas::Canvas;
pub use types::{StitchError, TileProgress};

use std::thread;
use std::time::Duration;

use image::RgbImage;
use tracing::{debug, info};

use crate::grid::TileGrid;
use crate::provider::TileSource;

/// Default pause between tile requests.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(500);

/// Fetches and composites the tiles of a grid.
#[derive(Debug, Clone)]
pub struct Stitcher {
    delay: Duration,
}

impl Default for Stitcher {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

impl Stitcher {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Builds the full image for `grid`.
    pub fn run<S: TileSource>(&self, grid: &TileGrid, source: &S) -> Result<RgbImage, StitchError> {
        self.run_with_progress(grid, source, |_| {})
    }

    /// Like [`Stitcher::run`], calling `on_tile` after each tile is placed.
    pub fn run_with_progress<S, F>(
        &self,
        grid: &TileGrid,
        source: &S,
        mut on_tile: F,
    ) -> Result<RgbImage, StitchError>
    where
        S: TileSource,
        F: FnMut(TileProgress),
    {
        let (width, height) = grid.canvas_size();
        let total = grid.tile_count();
        let mut canvas = Canvas::new(width, height);

        info!(
            provider = source.name(),
            columns = grid.columns(),
            rows = grid.rows(),
            width,
            height,
            "Stitching {} tiles",
            total
        );

        for (index, spec) in grid.tiles().enumerate() {
            if index > 0 && !self.delay.is_zero() {
                thread::sleep(self.delay);
            }

            info!(
                "Fetching tile column {} row {} at {}",
                spec.col, spec.row, spec.request.center
            );

            let bytes = source
                .fetch(&spec.request)
                .map_err(|source| StitchError::Fetch {
                    col: spec.col,
                    row: spec.row,
                    source,
                })?;

            let tile = image::load_from_memory(&bytes).map_err(|source| StitchError::Decode {
                col: spec.col,
                row: spec.row,
                source,
            })?;

            debug!(
                col = spec.col,
                row = spec.row,
                bytes = bytes.len(),
                tile_width = tile.width(),
                tile_height = tile.height(),
                "Decoded tile"
            );

            canvas.paste(&tile, &spec);

            on_tile(TileProgress {
                col: spec.col,
                row: spec.row,
                completed: index + 1,
                total,
            });
        }

        Ok(canvas.into_image())
    }
}
