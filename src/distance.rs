// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use crate::validate::{check_latitude, check_longitude};
use crate::InvalidArgument;

/// Radius of the spherical Earth model, in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.01;

/// Radius of the spherical Earth model, in meters.
pub const EARTH_RADIUS_M: f64 = EARTH_RADIUS_KM * 1000.0;

/// Calculates the great-circle distance between two lat-lon positions
/// on Earth using the [Vincenty formula](https://en.wikipedia.org/wiki/Great-circle_distance#Computational_formulae)
/// for a sphere. Returns the result in kilometers.
///
/// Unlike the spherical law of cosines or the haversine formula, this remains accurate
/// for both coincident and antipodal points.
pub fn great_circle_distance(
    lat1: f64,
    lon1: f64,
    lat2: f64,
    lon2: f64,
) -> Result<f64, InvalidArgument> {
    check_latitude(lat1)?;
    check_longitude(lon1)?;
    check_latitude(lat2)?;
    check_longitude(lon2)?;

    let lat1 = lat1.to_radians();
    let lat2 = lat2.to_radians();

    let (sin1, cos1) = lat1.sin_cos();
    let (sin2, cos2) = lat2.sin_cos();

    let dlon = lon1.to_radians() - lon2.to_radians();
    let (sin_dlon, cos_dlon) = dlon.sin_cos();

    let t1 = cos2 * sin_dlon;
    let t2 = cos1 * sin2 - sin1 * cos2 * cos_dlon;
    let t3 = sin1 * sin2 + cos1 * cos2 * cos_dlon;

    Ok((t1 * t1 + t2 * t2).sqrt().atan2(t3) * EARTH_RADIUS_KM)
}

/// Calculates the great-circle distance between two lat-lon positions
/// on Earth using the [haversine formula](https://en.wikipedia.org/wiki/Haversine_formula).
/// Returns the result in kilometers.
///
/// Loses precision for nearly-antipodal points; prefer [great_circle_distance].
pub fn haversine_distance(
    lat1: f64,
    lon1: f64,
    lat2: f64,
    lon2: f64,
) -> Result<f64, InvalidArgument> {
    check_latitude(lat1)?;
    check_longitude(lon1)?;
    check_latitude(lat2)?;
    check_longitude(lon2)?;
    Ok(haversine_distance_unchecked(lat1, lon1, lat2, lon2))
}

/// Same as [haversine_distance], but without validating the coordinates.
/// Out-of-range inputs are silently accepted, and non-finite inputs produce NaN.
pub fn haversine_distance_unchecked(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1 = lat1.to_radians();
    let lon1 = lon1.to_radians();
    let lat2 = lat2.to_radians();
    let lon2 = lon2.to_radians();

    let sin_dlat_half = ((lat2 - lat1) * 0.5).sin();
    let sin_dlon_half = ((lon2 - lon1) * 0.5).sin();

    let h = sin_dlat_half * sin_dlat_half + lat1.cos() * lat2.cos() * sin_dlon_half * sin_dlon_half;

    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

#[cfg(test)]
mod tests {
    use super::*;
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

    const POSITIONS: &[(f64, f64)] = &[
        (0.0, 0.0),
        (51.5074, -0.1278),
        (48.8566, 2.3522),
        (-33.8688, 151.2093),
        (40.7484, -73.9857),
        (90.0, 0.0),
        (-90.0, 180.0),
        (12.5, -180.0),
    ];

    #[test]
    fn identity() {
        for &(lat, lon) in POSITIONS {
            assert_eq!(great_circle_distance(lat, lon, lat, lon), Ok(0.0));
            assert_almost_eq!(haversine_distance(lat, lon, lat, lon).unwrap(), 0.0, 1e-9);
        }
    }

    #[test]
    fn symmetry() {
        for &(lat1, lon1) in POSITIONS {
            for &(lat2, lon2) in POSITIONS {
                let there = great_circle_distance(lat1, lon1, lat2, lon2).unwrap();
                let back = great_circle_distance(lat2, lon2, lat1, lon1).unwrap();
                assert_almost_eq!(there, back, 1e-9);
            }
        }
    }

    #[test]
    fn antipodes() {
        assert_almost_eq!(
            great_circle_distance(0.0, 0.0, 0.0, 180.0).unwrap(),
            PI * EARTH_RADIUS_KM,
            1e-6
        );
        assert_almost_eq!(
            great_circle_distance(90.0, 0.0, -90.0, 0.0).unwrap(),
            PI * EARTH_RADIUS_KM,
            1e-6
        );
    }

    #[test]
    fn london_paris() {
        let d = great_circle_distance(51.5074, -0.1278, 48.8566, 2.3522).unwrap();
        assert_almost_eq!(d, 343.5566, 1e-3);

        let h = haversine_distance(51.5074, -0.1278, 48.8566, 2.3522).unwrap();
        assert_almost_eq!(h, d, 1e-6);
    }

    #[test]
    fn one_degree_of_longitude_on_equator() {
        let d = great_circle_distance(0.0, 0.0, 0.0, 1.0).unwrap();
        assert_almost_eq!(d, EARTH_RADIUS_KM * PI / 180.0, 1e-9);
    }

    #[test]
    fn invalid_arguments() {
        assert_eq!(
            great_circle_distance(91.0, 0.0, 0.0, 0.0),
            Err(InvalidArgument::Latitude(91.0))
        );
        assert_eq!(
            great_circle_distance(0.0, 0.0, 0.0, -181.0),
            Err(InvalidArgument::Longitude(-181.0))
        );
        assert_eq!(
            haversine_distance(0.0, 0.0, -90.5, 0.0),
            Err(InvalidArgument::Latitude(-90.5))
        );
        assert!(great_circle_distance(0.0, f64::NAN, 0.0, 0.0).is_err());
        assert!(haversine_distance(0.0, 0.0, f64::INFINITY, 0.0).is_err());
    }

    #[test]
    fn haversine_unchecked() {
        // 360° of longitude brings us back to the same place
        assert_almost_eq!(haversine_distance_unchecked(0.0, 0.0, 0.0, 360.0), 0.0, 1e-9);
        assert!(haversine_distance_unchecked(f64::NAN, 0.0, 0.0, 0.0).is_nan());
    }
}
