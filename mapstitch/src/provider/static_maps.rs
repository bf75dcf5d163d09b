//! Google Maps Static API provider.
//!
//! Requests one satellite image per tile, centered on a coordinate, with an
//! explicit pixel size. Requires a Google Maps Platform API key with the
//! Maps Static API enabled.
//!
//! # URL Pattern
//!
//! `https://maps.googleapis.com/maps/api/staticmap?center={lat},{lon}&zoom={z}&size={w}x{h}&maptype=satellite&scale={s}&key={API_KEY}`
//!
//! The returned image carries a Google logo in its bottom band, which the
//! grid accounts for with its logo cutoff.

use tracing::debug;

use crate::grid::{TileRequest, MAX_ZOOM};
use crate::provider::{HttpClient, ProviderError, TileSource};

/// Default Static API endpoint.
pub const STATIC_MAPS_URL: &str = "https://maps.googleapis.com/maps/api/staticmap";

/// Minimum zoom level accepted by the Static API.
const MIN_ZOOM: u8 = 0;

/// Static-map satellite imagery provider.
///
/// # Example
///
/// ```no_run
/// use mapstitch::provider::{ReqwestClient, StaticMapsProvider};
///
/// let client = ReqwestClient::new().unwrap();
/// let provider = StaticMapsProvider::new(client, "YOUR_API_KEY".to_string());
/// ```
pub struct StaticMapsProvider<C: HttpClient> {
    http_client: C,
    api_key: String,
    endpoint: String,
    maptype: String,
}

impl<C: HttpClient> StaticMapsProvider<C> {
    /// Creates a provider for the default endpoint.
    pub fn new(http_client: C, api_key: String) -> Self {
        Self::with_endpoint(http_client, api_key, STATIC_MAPS_URL.to_string())
    }

    /// Creates a provider for a custom endpoint, e.g. a proxy.
    pub fn with_endpoint(http_client: C, api_key: String, endpoint: String) -> Self {
        Self {
            http_client,
            api_key,
            endpoint,
            maptype: "satellite".to_string(),
        }
    }

    fn supports_zoom(&self, zoom: u8) -> bool {
        (MIN_ZOOM..=MAX_ZOOM).contains(&zoom)
    }

    /// Builds the request URL; query values are percent-encoded.
    fn build_url(&self, request: &TileRequest) -> Result<reqwest::Url, ProviderError> {
        let center = request.center.to_string();
        let zoom = request.zoom.to_string();
        let size = format!("{}x{}", request.width, request.height);
        let scale = request.scale.to_string();

        debug!(
            center = %center,
            zoom = request.zoom,
            size = %size,
            maptype = %self.maptype,
            scale = request.scale,
            "Static map request parameters"
        );

        reqwest::Url::parse_with_params(
            &self.endpoint,
            &[
                ("center", center.as_str()),
                ("zoom", zoom.as_str()),
                ("size", size.as_str()),
                ("maptype", self.maptype.as_str()),
                ("scale", scale.as_str()),
                ("key", self.api_key.as_str()),
            ],
        )
        .map_err(|e| ProviderError::InvalidUrl(format!("{}: {}", self.endpoint, e)))
    }
}

impl<C: HttpClient> TileSource for StaticMapsProvider<C> {
    fn fetch(&self, request: &TileRequest) -> Result<Vec<u8>, ProviderError> {
        if !self.supports_zoom(request.zoom) {
            return Err(ProviderError::UnsupportedZoom(request.zoom));
        }

        let url = self.build_url(request)?;
        self.http_client.get(url.as_str())
    }

    fn name(&self) -> &str {
        "Google Maps Static API"
    }
}
