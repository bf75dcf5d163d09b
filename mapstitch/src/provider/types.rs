//! Provider traits and errors

use thiserror::Error;

use crate::grid::TileRequest;

/// Errors returned while fetching a tile.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// Transport-level failure (connection, timeout, body read).
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// The server answered with a non-success status.
    #[error("HTTP {status} from {url}")]
    HttpStatus { status: u16, url: String },

    /// The provider cannot serve this zoom level.
    #[error("Unsupported zoom level: {0}")]
    UnsupportedZoom(u8),

    /// The request URL could not be built.
    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),
}

/// Source of tile images.
///
/// Implementations return the encoded image bytes (PNG, JPEG, ...) for one
/// request. The stitcher decodes them.
pub trait TileSource {
    fn fetch(&self, request: &TileRequest) -> Result<Vec<u8>, ProviderError>;

    /// Human-readable provider name for logs.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let err = ProviderError::HttpStatus {
            status: 403,
            url: "https://maps.googleapis.com/maps/api/staticmap".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "HTTP 403 from https://maps.googleapis.com/maps/api/staticmap"
        );
    }

    #[test]
    fn test_unsupported_zoom_display() {
        assert_eq!(
            ProviderError::UnsupportedZoom(30).to_string(),
            "Unsupported zoom level: 30"
        );
    }
}
