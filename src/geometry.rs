// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

//! Minimal view of geometries needed by spherical functions.
//!
//! Parsing and serializing geometries is left to the caller. Any geometry type
//! can be passed to [spherical_distance] by implementing [SphericalGeometry];
//! [Geometry] is a simple owned implementation.

use std::fmt;

use crate::validate::validate_geometry_kind;
use crate::{great_circle_distance, GeoPoint, InvalidArgument};

/// Kinds of geometries which may be stored in a spherical geography value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryKind {
    Point,
    MultiPoint,
    LineString,
    MultiLineString,
    Polygon,
    MultiPolygon,
    GeometryCollection,
}

impl GeometryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Point => "POINT",
            Self::MultiPoint => "MULTI_POINT",
            Self::LineString => "LINE_STRING",
            Self::MultiLineString => "MULTI_LINE_STRING",
            Self::Polygon => "POLYGON",
            Self::MultiPolygon => "MULTI_POLYGON",
            Self::GeometryCollection => "GEOMETRY_COLLECTION",
        }
    }
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Interface between spherical functions and the caller's geometry representation.
pub trait SphericalGeometry {
    fn kind(&self) -> GeometryKind;

    fn is_empty(&self) -> bool;

    /// Returns the position of a non-empty [GeometryKind::Point] geometry,
    /// and `None` for everything else.
    fn as_point(&self) -> Option<GeoPoint>;
}

/// Simple owned geometry, with rings and parts stored as vectors of positions.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// A single position, or an empty point (`POINT EMPTY`).
    Point(Option<GeoPoint>),
    MultiPoint(Vec<GeoPoint>),
    LineString(Vec<GeoPoint>),
    MultiLineString(Vec<Vec<GeoPoint>>),
    Polygon(Vec<Vec<GeoPoint>>),
    MultiPolygon(Vec<Vec<Vec<GeoPoint>>>),
    GeometryCollection(Vec<Geometry>),
}

impl SphericalGeometry for Geometry {
    fn kind(&self) -> GeometryKind {
        match self {
            Self::Point(_) => GeometryKind::Point,
            Self::MultiPoint(_) => GeometryKind::MultiPoint,
            Self::LineString(_) => GeometryKind::LineString,
            Self::MultiLineString(_) => GeometryKind::MultiLineString,
            Self::Polygon(_) => GeometryKind::Polygon,
            Self::MultiPolygon(_) => GeometryKind::MultiPolygon,
            Self::GeometryCollection(_) => GeometryKind::GeometryCollection,
        }
    }

    fn is_empty(&self) -> bool {
        match self {
            Self::Point(p) => p.is_none(),
            Self::MultiPoint(points) | Self::LineString(points) => points.is_empty(),
            Self::MultiLineString(parts) | Self::Polygon(parts) => {
                parts.iter().all(|part| part.is_empty())
            }
            Self::MultiPolygon(polygons) => polygons.iter().flatten().all(|ring| ring.is_empty()),
            Self::GeometryCollection(geometries) => geometries.iter().all(|g| g.is_empty()),
        }
    }

    fn as_point(&self) -> Option<GeoPoint> {
        match *self {
            Self::Point(p) => p,
            _ => None,
        }
    }
}

impl From<GeoPoint> for Geometry {
    fn from(p: GeoPoint) -> Self {
        Self::Point(Some(p))
    }
}

/// Geometry kinds accepted by [spherical_distance].
const SPHERICAL_DISTANCE_KINDS: &[GeometryKind] = &[GeometryKind::Point];

/// Calculates the great-circle distance between two point geometries, **in meters**.
///
/// Returns `Ok(None)` if either geometry is empty, and an error if any geometry
/// is not a point or has invalid coordinates.
pub fn spherical_distance<A, B>(left: &A, right: &B) -> Result<Option<f64>, InvalidArgument>
where
    A: SphericalGeometry + ?Sized,
    B: SphericalGeometry + ?Sized,
{
    if left.is_empty() || right.is_empty() {
        return Ok(None);
    }

    validate_geometry_kind("ST_Distance", left.kind(), SPHERICAL_DISTANCE_KINDS)?;
    validate_geometry_kind("ST_Distance", right.kind(), SPHERICAL_DISTANCE_KINDS)?;

    match (left.as_point(), right.as_point()) {
        (Some(l), Some(r)) => {
            let km = great_circle_distance(l.lat, l.lon, r.lat, r.lon)?;
            Ok(Some(km * 1000.0))
        }
        // A non-empty point without a position is a broken SphericalGeometry impl
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EARTH_RADIUS_M;
    use std::f64::consts::PI;

    macro_rules! assert_almost_eq {
        ($a:expr, $b:expr, $eps:expr) => {
            assert!(
                (($a - $b).abs() <= $eps),
                "assertion failed: {} ≈ {}",
                $a,
                $b
            )
        };
    }

    #[test]
    fn distance_in_meters() {
        let a = Geometry::from(GeoPoint::new(-0.1278, 51.5074));
        let b = Geometry::from(GeoPoint::new(2.3522, 48.8566));
        let d = spherical_distance(&a, &b).unwrap().unwrap();
        assert_almost_eq!(d, 343_556.6, 0.1);

        let a = Geometry::from(GeoPoint::new(0.0, 0.0));
        let b = Geometry::from(GeoPoint::new(180.0, 0.0));
        let d = spherical_distance(&a, &b).unwrap().unwrap();
        assert_almost_eq!(d, PI * EARTH_RADIUS_M, 1e-3);
    }

    #[test]
    fn empty_geometries() {
        let empty = Geometry::Point(None);
        let point = Geometry::from(GeoPoint::new(1.0, 2.0));

        assert_eq!(spherical_distance(&empty, &point), Ok(None));
        assert_eq!(spherical_distance(&point, &empty), Ok(None));
        assert_eq!(spherical_distance(&empty, &empty), Ok(None));

        // Emptiness is checked before the geometry kind
        let empty_line = Geometry::LineString(Vec::new());
        assert_eq!(spherical_distance(&empty_line, &point), Ok(None));
    }

    #[test]
    fn non_point_geometries() {
        let point = Geometry::from(GeoPoint::new(1.0, 2.0));
        let line = Geometry::LineString(vec![GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 1.0)]);

        let err = spherical_distance(&point, &line).unwrap_err();
        assert_eq!(
            err,
            InvalidArgument::GeometryKind {
                function: "ST_Distance",
                allowed: &[GeometryKind::Point],
                actual: GeometryKind::LineString,
            }
        );
        assert_eq!(
            err.to_string(),
            "When applied to SphericalGeography inputs, ST_Distance only supports POINT. Input type is: LINE_STRING",
        );

        let multi = Geometry::MultiPoint(vec![GeoPoint::new(0.0, 0.0)]);
        assert!(spherical_distance(&multi, &point).is_err());
    }

    #[test]
    fn invalid_coordinates() {
        let bad = Geometry::from(GeoPoint::new(0.0, 100.0));
        let point = Geometry::from(GeoPoint::new(1.0, 2.0));
        assert_eq!(
            spherical_distance(&point, &bad),
            Err(InvalidArgument::Latitude(100.0))
        );
    }

    #[test]
    fn emptiness() {
        assert!(Geometry::Polygon(vec![Vec::new()]).is_empty());
        assert!(Geometry::GeometryCollection(vec![Geometry::Point(None)]).is_empty());
        assert!(!Geometry::MultiPolygon(vec![vec![vec![GeoPoint::new(0.0, 0.0)]]]).is_empty());
        assert_eq!(Geometry::MultiPoint(Vec::new()).as_point(), None);
    }
}
