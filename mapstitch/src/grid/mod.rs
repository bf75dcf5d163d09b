//! Tile grid computation
//!
//! Splits a bounding box into a grid of static-map requests. Each request
//! stays within the provider's maximum image dimension and is extended at
//! the bottom by a logo band, which is cropped off again when stitching.
//!
//! ```
//! use mapstitch::coord::BoundingBox;
//! use mapstitch::grid::{GridConfig, TileGrid};
//!
//! let bbox = BoundingBox::from_degrees((1.0, 1.0), (0.99, 1.01)).unwrap();
//! let grid = TileGrid::new(&bbox, 16, &GridConfig::default()).unwrap();
//! assert!(grid.tile_count() >= 1);
//! ```

mod types;

pub use types::{
    GridConfig, GridError, TileRequest, TileSpec, DEFAULT_LOGO_CUTOFF, DEFAULT_MAX_TILE_SIZE,
    MAX_ZOOM,
};

use crate::coord::{to_lat_lon, to_pixels, BoundingBox, PixelPoint};

/// Upper bound on how far the tiles overhang `extent` after rounding up.
fn max_tile_slack(extent: f64, config: &GridConfig) -> f64 {
    (extent / config.max_tile_size as f64).ceil() + config.logo_cutoff as f64
}

/// A row/column layout of tiles covering a bounding box at one zoom level.
#[derive(Debug, Clone, PartialEq)]
pub struct TileGrid {
    zoom: u8,
    /// Left edge in pixel space.
    left: f64,
    /// Top (northern) edge in pixel space.
    top: f64,
    total_width: f64,
    total_height: f64,
    columns: u32,
    rows: u32,
    tile_width: u32,
    tile_height: u32,
    logo_cutoff: u32,
    scale: u8,
}

impl TileGrid {
    /// Computes the grid for a geographic bounding box.
    pub fn new(bbox: &BoundingBox, zoom: u8, config: &GridConfig) -> Result<Self, GridError> {
        let upper_left = to_pixels(bbox.northwest, zoom);
        let lower_right = to_pixels(bbox.southeast, zoom);
        Self::from_pixel_bounds(upper_left, lower_right, zoom, config)
    }

    /// Computes the grid from two opposite corners already in pixel space.
    ///
    /// The corners may be given in either order.
    pub fn from_pixel_bounds(
        upper_left: PixelPoint,
        lower_right: PixelPoint,
        zoom: u8,
        config: &GridConfig,
    ) -> Result<Self, GridError> {
        config.validate()?;
        if zoom > MAX_ZOOM {
            return Err(GridError::UnsupportedZoom {
                zoom,
                max: MAX_ZOOM,
            });
        }

        let total_width = (lower_right.x - upper_left.x).abs();
        let total_height = (upper_left.y - lower_right.y).abs();

        if !total_width.is_finite()
            || !total_height.is_finite()
            || total_width < 1.0
            || total_height < 1.0
        {
            return Err(GridError::InvalidArea {
                width: total_width,
                height: total_height,
                zoom,
            });
        }

        // Covered area including the rounded-up last tile, in device pixels
        let scale = config.scale as f64;
        let device_width = (total_width + max_tile_slack(total_width, config)) * scale;
        let device_height = (total_height + max_tile_slack(total_height, config)) * scale;
        if device_width > u32::MAX as f64 || device_height > u32::MAX as f64 {
            return Err(GridError::TooLarge {
                width: device_width,
                height: device_height,
            });
        }

        let max = config.max_tile_size as f64;
        let columns = (total_width / max).ceil() as u32;
        let rows = (total_height / max).ceil() as u32;

        let tile_width = (total_width / columns as f64).ceil() as u32;
        let tile_height = (total_height / rows as f64).ceil() as u32;

        Ok(Self {
            zoom,
            left: upper_left.x.min(lower_right.x),
            top: upper_left.y.max(lower_right.y),
            total_width,
            total_height,
            columns,
            rows,
            tile_width,
            tile_height,
            logo_cutoff: config.logo_cutoff,
            scale: config.scale,
        })
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn scale(&self) -> u8 {
        self.scale
    }

    pub fn logo_cutoff(&self) -> u32 {
        self.logo_cutoff
    }

    /// Exact width of the bounding box in logical pixels.
    pub fn total_width(&self) -> f64 {
        self.total_width
    }

    /// Exact height of the bounding box in logical pixels.
    pub fn total_height(&self) -> f64 {
        self.total_height
    }

    /// Visible size of one tile in logical pixels.
    pub fn tile_size(&self) -> (u32, u32) {
        (self.tile_width, self.tile_height)
    }

    /// Size to request from the provider, logo band included.
    pub fn request_size(&self) -> (u32, u32) {
        (self.tile_width, self.tile_height + self.logo_cutoff)
    }

    pub fn tile_count(&self) -> usize {
        self.columns as usize * self.rows as usize
    }

    /// Size of the stitched image in device pixels.
    pub fn canvas_size(&self) -> (u32, u32) {
        let scale = self.scale as u32;
        (
            self.total_width as u32 * scale,
            self.total_height as u32 * scale,
        )
    }

    /// Describes the tile at the given column and row.
    ///
    /// The center is shifted south by half the logo band so that, once the
    /// band is cropped, the visible part lines up with the grid cell.
    pub fn tile(&self, col: u32, row: u32) -> TileSpec {
        let dx = self.tile_width as f64 * (col as f64 + 0.5);
        let dy = self.tile_height as f64 * (row as f64 + 0.5);
        let center_pixel = PixelPoint::new(
            self.left + dx,
            self.top - dy - self.logo_cutoff as f64 / 2.0,
        );
        let center = to_lat_lon(center_pixel, self.zoom);
        let (width, height) = self.request_size();
        let scale = self.scale as u32;

        TileSpec {
            col,
            row,
            request: TileRequest {
                center,
                zoom: self.zoom,
                width,
                height,
                scale: self.scale,
            },
            offset_x: col * self.tile_width * scale,
            offset_y: row * self.tile_height * scale,
            visible_width: self.tile_width * scale,
            visible_height: self.tile_height * scale,
        }
    }

    /// All tiles, column by column, top to bottom within each column.
    pub fn tiles(&self) -> impl Iterator<Item = TileSpec> + '_ {
        (0..self.columns).flat_map(move |col| (0..self.rows).map(move |row| self.tile(col, row)))
    }
}
