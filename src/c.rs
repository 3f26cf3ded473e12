// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

//! C bindings. Errors are reported with sentinel values (NaN or `false`),
//! and the rejected arguments are logged with [log::warn].

use super::*;

fn ok_or_nan(result: Result<f64, InvalidArgument>) -> f64 {
    result.unwrap_or_else(|e| {
        log::warn!("{}", e);
        f64::NAN
    })
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn sphgeo_great_circle_distance(
    lat1: f64,
    lon1: f64,
    lat2: f64,
    lon2: f64,
) -> f64 {
    ok_or_nan(great_circle_distance(lat1, lon1, lat2, lon2))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn sphgeo_haversine_distance(
    lat1: f64,
    lon1: f64,
    lat2: f64,
    lon2: f64,
) -> f64 {
    ok_or_nan(haversine_distance(lat1, lon1, lat2, lon2))
}

/// Null pointers represent empty points, for which NaN is returned.
/// The result is in meters.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn sphgeo_spherical_distance(
    left: *const GeoPoint,
    right: *const GeoPoint,
) -> f64 {
    let left = geometry::Geometry::Point(left.as_ref().copied());
    let right = geometry::Geometry::Point(right.as_ref().copied());
    match spherical_distance(&left, &right) {
        Ok(Some(meters)) => meters,
        Ok(None) => f64::NAN,
        Err(e) => {
            log::warn!("{}", e);
            f64::NAN
        }
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn sphgeo_nearest_point_on_great_circle(
    origin: GeoPoint,
    arc_start: GeoPoint,
    arc_end: GeoPoint,
    out: *mut GeoPoint,
) -> bool {
    match nearest_point_on_great_circle(origin, arc_start, arc_end) {
        Ok(p) => {
            if let Some(out) = out.as_mut() {
                *out = p;
            }
            true
        }
        Err(e) => {
            log::warn!("{}", e);
            false
        }
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn sphgeo_distance_between_point_to_arc(
    origin: GeoPoint,
    arc_start: GeoPoint,
    arc_end: GeoPoint,
) -> f64 {
    ok_or_nan(distance_between_point_to_arc(origin, arc_start, arc_end))
}
