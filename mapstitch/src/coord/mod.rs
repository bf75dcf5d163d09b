//! Coordinate conversion module
//!
//! Converts between geographic coordinates (radians) and the projected
//! pixel space used to lay out static-map tiles. The projection is the
//! spherical Web Mercator, scaled so that the whole world is
//! `2^(zoom + 8)` pixels wide.

mod types;

pub use types::{
    BoundingBox, CoordError, GeoPoint, PixelPoint, DEGREE, MAX_LAT_DEGREES, MAX_LON_DEGREES, TAU,
    ZOOM_OFFSET,
};

/// Pixels per radian at the given zoom level.
#[inline]
pub fn scale_factor(zoom: u8) -> f64 {
    2.0_f64.powi(zoom as i32 + ZOOM_OFFSET) / TAU
}

/// Projects a geographic point into pixel space.
///
/// Not guarded at the poles, where `y` blows up. Validate input with
/// [`GeoPoint::from_degrees_checked`] first.
#[inline]
pub fn to_pixels(point: GeoPoint, zoom: u8) -> PixelPoint {
    let res = scale_factor(zoom);
    let mx = point.lon;
    let my = (point.lat / 2.0 + TAU / 8.0).tan().ln();
    PixelPoint::new(mx * res, my * res)
}

/// Inverse of [`to_pixels`].
#[inline]
pub fn to_lat_lon(pixel: PixelPoint, zoom: u8) -> GeoPoint {
    let res = scale_factor(zoom);
    let lon = pixel.x / res;
    let lat = 2.0 * (pixel.y / res).exp().atan() - TAU / 4.0;
    GeoPoint::new(lat, lon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_origin_maps_to_origin() {
        let p = to_pixels(GeoPoint::new(0.0, 0.0), 10);
        assert!(p.x.abs() < 1e-9);
        assert!(p.y.abs() < 1e-9);
    }

    #[test]
    fn test_world_width_at_zoom_zero() {
        // 360° of longitude spans 256 pixels at zoom 0
        let west = to_pixels(GeoPoint::from_degrees(0.0, -180.0), 0);
        let east = to_pixels(GeoPoint::from_degrees(0.0, 180.0), 0);
        assert!((east.x - west.x - 256.0).abs() < 1e-9);
    }

    #[test]
    fn test_y_grows_northward() {
        let south = to_pixels(GeoPoint::from_degrees(-10.0, 0.0), 5);
        let north = to_pixels(GeoPoint::from_degrees(10.0, 0.0), 5);
        assert!(north.y > 0.0);
        assert!(south.y < 0.0);
        assert!((north.y + south.y).abs() < 1e-9, "Projection is symmetric");
    }

    #[test]
    fn test_each_zoom_doubles_scale() {
        for zoom in 0..20 {
            let ratio = scale_factor(zoom + 1) / scale_factor(zoom);
            assert!((ratio - 2.0).abs() < 1e-12);
        }
    }

    proptest! {
        #[test]
        fn prop_projection_roundtrip(
            lat in -84.999f64..84.999,
            lon in -180.0f64..180.0,
            zoom in 1u8..=20,
        ) {
            let original = GeoPoint::from_degrees(lat, lon);
            let back = to_lat_lon(to_pixels(original, zoom), zoom);
            prop_assert!((back.lat - original.lat).abs() < 1e-9);
            prop_assert!((back.lon - original.lon).abs() < 1e-9);
        }
    }
}
