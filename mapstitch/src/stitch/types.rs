//! Stitcher types and errors

use thiserror::Error;

use crate::provider::ProviderError;

/// Errors that abort a stitching run.
///
/// Every variant names the tile that failed; no partial image is produced.
#[derive(Debug, Error)]
pub enum StitchError {
    /// The provider could not deliver the tile.
    #[error("Failed to fetch tile at column {col} row {row}: {source}")]
    Fetch {
        col: u32,
        row: u32,
        #[source]
        source: ProviderError,
    },

    /// The tile bytes are not a decodable image.
    #[error("Failed to decode tile at column {col} row {row}: {source}")]
    Decode {
        col: u32,
        row: u32,
        #[source]
        source: image::ImageError,
    },
}

impl StitchError {
    /// Column and row of the tile that failed.
    pub fn tile(&self) -> (u32, u32) {
        match self {
            StitchError::Fetch { col, row, .. } | StitchError::Decode { col, row, .. } => {
                (*col, *row)
            }
        }
    }
}

/// Progress notification sent after each tile is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileProgress {
    pub col: u32,
    pub row: u32,
    /// Tiles placed so far, this one included.
    pub completed: usize,
    pub total: usize,
}
