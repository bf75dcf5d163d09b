//! mapstitch - Satellite image stitching from static-map tiles
//!
//! Converts a northwest/southeast bounding box and a zoom level into one
//! large image. The box is projected into Web Mercator pixel space, split
//! into a grid of requests no larger than the provider allows, and each
//! tile is fetched in turn and pasted into a single canvas.
//!
//! ```no_run
//! use mapstitch::coord::BoundingBox;
//! use mapstitch::grid::{GridConfig, TileGrid};
//! use mapstitch::provider::{ReqwestClient, StaticMapsProvider};
//! use mapstitch::stitch::Stitcher;
//!
//! let bbox = BoundingBox::from_degrees((52.52, 13.40), (52.51, 13.42)).unwrap();
//! let grid = TileGrid::new(&bbox, 17, &GridConfig::default()).unwrap();
//! let provider = StaticMapsProvider::new(ReqwestClient::new().unwrap(), "KEY".to_string());
//! let image = Stitcher::default().run(&grid, &provider).unwrap();
//! ```

pub mod config;
pub mod coord;
pub mod grid;
pub mod logging;
pub mod output;
pub mod provider;
pub mod stitch;
