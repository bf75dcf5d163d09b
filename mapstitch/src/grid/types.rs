//! Grid types and errors

use thiserror::Error;

use crate::coord::GeoPoint;

/// Max width or height of a single image requested from the provider.
pub const DEFAULT_MAX_TILE_SIZE: u32 = 600;

/// Height of the band at the bottom of each tile that carries the vendor logo.
/// The logo is assumed to be shorter than this.
pub const DEFAULT_LOGO_CUTOFF: u32 = 32;

/// Highest zoom level static-map providers serve.
pub const MAX_ZOOM: u8 = 22;

/// Errors that can occur while laying out a tile grid.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    /// The area is degenerate or not finite in pixel space.
    #[error("Bounding box spans {width}×{height} pixels at zoom {zoom}; need a finite area of at least 1×1")]
    InvalidArea { width: f64, height: f64, zoom: u8 },

    /// Zoom level beyond what providers serve.
    #[error("Unsupported zoom level {zoom}: must be between 0 and {max}")]
    UnsupportedZoom { zoom: u8, max: u8 },

    /// The stitched image would not fit in a 32-bit sized buffer.
    #[error("Stitched image of {width}×{height} pixels is too large")]
    TooLarge { width: f64, height: f64 },

    /// Invalid grid configuration.
    #[error("Invalid grid configuration: {0}")]
    InvalidConfig(String),
}

/// Tunables for grid layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridConfig {
    /// Upper bound for the visible width and height of one tile, in logical pixels.
    pub max_tile_size: u32,
    /// Logo band height in logical pixels.
    pub logo_cutoff: u32,
    /// Device pixel ratio, 1 or 2.
    pub scale: u8,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            max_tile_size: DEFAULT_MAX_TILE_SIZE,
            logo_cutoff: DEFAULT_LOGO_CUTOFF,
            scale: 1,
        }
    }
}

impl GridConfig {
    pub fn validate(&self) -> Result<(), GridError> {
        if self.max_tile_size == 0 {
            return Err(GridError::InvalidConfig(
                "max_tile_size must be greater than zero".to_string(),
            ));
        }
        if !matches!(self.scale, 1 | 2) {
            return Err(GridError::InvalidConfig(format!(
                "scale must be 1 or 2, got {}",
                self.scale
            )));
        }
        Ok(())
    }
}

/// Parameters for one static-map request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileRequest {
    pub center: GeoPoint,
    pub zoom: u8,
    /// Requested width in logical pixels.
    pub width: u32,
    /// Requested height in logical pixels, logo band included.
    pub height: u32,
    pub scale: u8,
}

/// One cell of a [`super::TileGrid`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileSpec {
    pub col: u32,
    pub row: u32,
    pub request: TileRequest,
    /// Paste position in the canvas, device pixels.
    pub offset_x: u32,
    pub offset_y: u32,
    /// Part of the fetched image kept after cropping the logo band, device pixels.
    pub visible_width: u32,
    pub visible_height: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(GridConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_tile_size_is_invalid() {
        let config = GridConfig {
            max_tile_size: 0,
            ..GridConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(GridError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_error_display() {
        let err = GridError::InvalidConfig("scale must be 1 or 2, got 4".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid grid configuration: scale must be 1 or 2, got 4"
        );
    }
}
