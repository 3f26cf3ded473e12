// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use crate::validate::check_point;
use crate::{CartesianPoint, GeoPoint, InvalidArgument};

/// Maximum slack, in kilometers, in the triangle inequality
/// `|start→nearest| + |nearest→end| = |start→end|` for the nearest point
/// on a great circle to be considered as lying on an arc of that circle.
pub const ARC_MEMBERSHIP_TOLERANCE_KM: f64 = 0.001;

/// Finds the point on the great circle going through `arc_start` and `arc_end`
/// which is closest to `origin`.
///
/// The result does not depend on the order of `arc_start` and `arc_end`, and may lie
/// outside of the arc between them.
///
/// The result is undefined when `arc_start` and `arc_end` are equal or antipodal
/// (there is no single great circle through them), or when `origin` is a pole
/// of the great circle (all points on the great circle are equally close).
/// In those cases the projected vector degenerates to (close to) zero.
pub fn nearest_point_on_great_circle(
    origin: GeoPoint,
    arc_start: GeoPoint,
    arc_end: GeoPoint,
) -> Result<GeoPoint, InvalidArgument> {
    check_point(origin)?;
    check_point(arc_start)?;
    check_point(arc_end)?;
    Ok(project_onto_great_circle(origin, arc_start, arc_end))
}

fn project_onto_great_circle(origin: GeoPoint, arc_start: GeoPoint, arc_end: GeoPoint) -> GeoPoint {
    let origin = CartesianPoint::from(origin);
    let arc_start = CartesianPoint::from(arc_start);
    let arc_end = CartesianPoint::from(arc_end);

    // Swapping arc_start and arc_end negates both arc_plane and intersecting_plane,
    // which cancels out in the final cross product.
    let arc_plane = arc_start.cross_product(&arc_end);
    let intersecting_plane = origin.cross_product(&arc_plane);
    arc_plane.cross_product(&intersecting_plane).to_geo_point()
}

/// Calculates the distance between `origin` and the closest point on the (shorter)
/// great-circle arc between `arc_start` and `arc_end`. Returns the result in kilometers.
///
/// If the closest point on the whole great circle lies outside of the arc
/// (see [ARC_MEMBERSHIP_TOLERANCE_KM]), the distance to the closer endpoint is returned.
pub fn distance_between_point_to_arc(
    origin: GeoPoint,
    arc_start: GeoPoint,
    arc_end: GeoPoint,
) -> Result<f64, InvalidArgument> {
    let nearest = nearest_point_on_great_circle(origin, arc_start, arc_end)?;

    let arc_length = arc_start.distance_to(&arc_end)?;
    let nearest_to_start = arc_start.distance_to(&nearest)?;
    let nearest_to_end = arc_end.distance_to(&nearest)?;

    let on_arc = (arc_length - nearest_to_start - nearest_to_end).abs() < ARC_MEMBERSHIP_TOLERANCE_KM;
    log::trace!(
        "nearest point on great circle: ({}, {}), on arc: {}",
        nearest.lon,
        nearest.lat,
        on_arc
    );

    if on_arc {
        nearest.distance_to(&origin)
    } else {
        let to_start = origin.distance_to(&arc_start)?;
        let to_end = origin.distance_to(&arc_end)?;
        Ok(to_start.min(to_end))
    }
}
