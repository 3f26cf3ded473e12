// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use crate::geometry::GeometryKind;
use crate::{GeoPoint, InvalidArgument};

pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;

/// Ensures a latitude is finite and within [-90, 90] degrees.
pub fn check_latitude(latitude: f64) -> Result<(), InvalidArgument> {
    // NaN fails both comparisons, so it has to be rejected explicitly
    if !latitude.is_finite() || latitude < MIN_LATITUDE || latitude > MAX_LATITUDE {
        return Err(InvalidArgument::Latitude(latitude));
    }
    Ok(())
}

/// Ensures a longitude is finite and within [-180, 180] degrees.
pub fn check_longitude(longitude: f64) -> Result<(), InvalidArgument> {
    if !longitude.is_finite() || longitude < MIN_LONGITUDE || longitude > MAX_LONGITUDE {
        return Err(InvalidArgument::Longitude(longitude));
    }
    Ok(())
}

/// Ensures both coordinates of a [GeoPoint] are valid.
pub fn check_point(p: GeoPoint) -> Result<(), InvalidArgument> {
    check_latitude(p.lat)?;
    check_longitude(p.lon)
}

/// Ensures that `function` was called with a geometry of one of the `allowed` kinds.
pub fn validate_geometry_kind(
    function: &'static str,
    actual: GeometryKind,
    allowed: &'static [GeometryKind],
) -> Result<(), InvalidArgument> {
    if allowed.contains(&actual) {
        Ok(())
    } else {
        Err(InvalidArgument::GeometryKind {
            function,
            allowed,
            actual,
        })
    }
}
