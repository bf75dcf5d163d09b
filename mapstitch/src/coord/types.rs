//! Coordinate types and errors.

use std::fmt;

use thiserror::Error;

/// Full turn in radians (circumference / radius).
pub const TAU: f64 = std::f64::consts::TAU;

/// One degree expressed in radians.
pub const DEGREE: f64 = TAU / 360.0;

/// Added to the zoom level when computing the projection scale.
///
/// A zoom-0 world is 2^8 = 256 pixels wide, the size of a classic web map tile.
pub const ZOOM_OFFSET: i32 = 8;

/// Latitude limit (exclusive) in degrees; the projection diverges at the poles.
pub const MAX_LAT_DEGREES: f64 = 90.0;

/// Longitude limit (inclusive) in degrees.
pub const MAX_LON_DEGREES: f64 = 180.0;

/// Errors produced when turning user input into geographic coordinates.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordError {
    /// Latitude is not strictly between the poles.
    #[error("Invalid latitude {0}°: must be strictly between -90 and 90")]
    InvalidLatitude(f64),

    /// Longitude is outside [-180, 180].
    #[error("Invalid longitude {0}°: must be between -180 and 180")]
    InvalidLongitude(f64),
}

/// A geographic position, stored in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    /// Latitude in radians, positive north.
    pub lat: f64,
    /// Longitude in radians, positive east.
    pub lon: f64,
}

impl GeoPoint {
    /// Creates a point from radians.
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Creates a point from degrees without any range checking.
    pub fn from_degrees(lat: f64, lon: f64) -> Self {
        Self {
            lat: lat * DEGREE,
            lon: lon * DEGREE,
        }
    }

    /// Creates a point from degrees, rejecting the poles and anything
    /// the projection cannot represent.
    pub fn from_degrees_checked(lat: f64, lon: f64) -> Result<Self, CoordError> {
        if !lat.is_finite() || lat.abs() >= MAX_LAT_DEGREES {
            return Err(CoordError::InvalidLatitude(lat));
        }
        if !lon.is_finite() || lon.abs() > MAX_LON_DEGREES {
            return Err(CoordError::InvalidLongitude(lon));
        }
        Ok(Self::from_degrees(lat, lon))
    }

    /// Returns `(lat, lon)` in degrees.
    pub fn to_degrees(&self) -> (f64, f64) {
        (self.lat / DEGREE, self.lon / DEGREE)
    }
}

impl fmt::Display for GeoPoint {
    /// Formats as `lat,lon` in degrees, the form static-map APIs expect.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (lat, lon) = self.to_degrees();
        write!(f, "{},{}", lat, lon)
    }
}

/// A point in projected pixel space at some zoom level.
///
/// `y` grows northward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A rectangular area given by its northwest and southeast corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub northwest: GeoPoint,
    pub southeast: GeoPoint,
}

impl BoundingBox {
    pub const fn new(northwest: GeoPoint, southeast: GeoPoint) -> Self {
        Self {
            northwest,
            southeast,
        }
    }

    /// Builds a bounding box from two `(lat, lon)` degree pairs, validating both.
    pub fn from_degrees(nw: (f64, f64), se: (f64, f64)) -> Result<Self, CoordError> {
        Ok(Self {
            northwest: GeoPoint::from_degrees_checked(nw.0, nw.1)?,
            southeast: GeoPoint::from_degrees_checked(se.0, se.1)?,
        })
    }
}
