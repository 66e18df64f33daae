//! Geographic coordinate types.
//!
//! Coordinates are geographic and unprojected. Longitude is the x axis and
//! latitude is the y axis everywhere in the crate; the two are distinct types
//! so a swapped pair fails to compile instead of silently testing the wrong
//! point.
//!
//! ## Usage
//!
//! ```
//! use airspace_geofence::core::{GeoPoint, Latitude, Longitude};
//!
//! let taipei = GeoPoint::new(Longitude::new(121.5654), Latitude::new(25.0330));
//!
//! assert_eq!(taipei.x(), 121.5654);
//! assert_eq!(taipei.y(), 25.0330);
//! ```

use serde::{Deserialize, Serialize};

/// Longitude in decimal degrees (the x axis).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Longitude(pub f64);

impl Longitude {
    /// Create a new longitude.
    #[must_use]
    pub const fn new(degrees: f64) -> Self {
        Self(degrees)
    }

    /// Get the raw degree value.
    #[must_use]
    pub const fn degrees(self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for Longitude {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "lon {}", self.0)
    }
}

/// Latitude in decimal degrees (the y axis).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Latitude(pub f64);

impl Latitude {
    /// Create a new latitude.
    #[must_use]
    pub const fn new(degrees: f64) -> Self {
        Self(degrees)
    }

    /// Get the raw degree value.
    #[must_use]
    pub const fn degrees(self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for Latitude {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "lat {}", self.0)
    }
}

/// A geographic point: a ring vertex or a geocoded query point.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lon: Longitude,
    pub lat: Latitude,
}

impl GeoPoint {
    /// Create a point from a longitude and a latitude.
    #[must_use]
    pub const fn new(lon: Longitude, lat: Latitude) -> Self {
        Self { lon, lat }
    }

    /// Create a point from an `[x, y]` pair as found in ring geometry.
    ///
    /// `x` is longitude, `y` is latitude. This is the only positional
    /// constructor; it exists for the raw dataset boundary.
    #[must_use]
    pub const fn from_xy(pair: [f64; 2]) -> Self {
        Self {
            lon: Longitude(pair[0]),
            lat: Latitude(pair[1]),
        }
    }

    /// Horizontal coordinate (longitude degrees).
    #[inline]
    #[must_use]
    pub const fn x(&self) -> f64 {
        self.lon.0
    }

    /// Vertical coordinate (latitude degrees).
    #[inline]
    #[must_use]
    pub const fn y(&self) -> f64 {
        self.lat.0
    }

    /// Both coordinates are finite numbers.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x().is_finite() && self.y().is_finite()
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.lon, self.lat)
    }
}
