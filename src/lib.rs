// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

//! Distances and nearest-point projections on a spherical Earth.
//!
//! All positions are longitude-latitude pairs in degrees. Earth is modelled as a perfect
//! sphere with radius [EARTH_RADIUS_KM]; no attempt is made to follow the WGS84 ellipsoid.
//!
//! Watch out for units - [great_circle_distance], [haversine_distance] and
//! [distance_between_point_to_arc] return kilometers, while [spherical_distance]
//! returns meters.
//!
//! # Example
//!
//! ```
//! use sphgeo::GeoPoint;
//!
//! let origin = GeoPoint::try_new(10.0, 13.0)?;
//! let arc_start = GeoPoint::try_new(-21.0, 19.0)?;
//! let arc_end = GeoPoint::try_new(32.0, 38.0)?;
//!
//! let km = sphgeo::distance_between_point_to_arc(origin, arc_start, arc_end)?;
//! assert!((km - 2149.78).abs() < 0.01);
//! # Ok::<(), sphgeo::InvalidArgument>(())
//! ```

mod arc;
pub mod c;
mod cartesian;
mod distance;
mod error;
pub mod geometry;
mod validate;

pub use arc::{
    distance_between_point_to_arc, nearest_point_on_great_circle, ARC_MEMBERSHIP_TOLERANCE_KM,
};
pub use cartesian::CartesianPoint;
pub use distance::{
    great_circle_distance, haversine_distance, haversine_distance_unchecked, EARTH_RADIUS_KM,
    EARTH_RADIUS_M,
};
pub use error::InvalidArgument;
pub use geometry::spherical_distance;
pub use validate::{
    check_latitude, check_longitude, check_point, validate_geometry_kind, MAX_LATITUDE,
    MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE,
};

/// Represents a position on Earth's surface, in degrees.
///
/// [GeoPoint::new] does not validate its arguments; all public functions of this crate
/// taking a GeoPoint do, and [GeoPoint::try_new] can be used to validate eagerly.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
}

impl GeoPoint {
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Creates a new GeoPoint, ensuring that both coordinates are finite and in range.
    pub fn try_new(lon: f64, lat: f64) -> Result<Self, InvalidArgument> {
        let p = Self { lon, lat };
        check_point(p)?;
        Ok(p)
    }

    /// Calculates the great-circle distance to another point, in kilometers.
    /// See [great_circle_distance].
    pub fn distance_to(&self, other: &GeoPoint) -> Result<f64, InvalidArgument> {
        great_circle_distance(self.lat, self.lon, other.lat, other.lon)
    }
}
