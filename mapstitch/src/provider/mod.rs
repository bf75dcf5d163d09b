//! Satellite imagery provider abstraction
//!
//! This module provides the [`TileSource`] trait the stitcher pulls tiles
//! from, and a static-map implementation backed by an [`HttpClient`].
//!
//! ```ignore
//! use mapstitch::provider::{ReqwestClient, StaticMapsProvider};
//!
//! let http_client = ReqwestClient::new()?;
//! let provider = StaticMapsProvider::new(http_client, api_key);
//! ```

mod http;
mod static_maps;
mod types;

pub use http::{HttpClient, ReqwestClient, DEFAULT_TIMEOUT_SECS};
pub use static_maps::{StaticMapsProvider, STATIC_MAPS_URL};
pub use types::{ProviderError, TileSource};

#[cfg(test)]
pub use http::tests::MockHttpClient;
