// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use crate::{GeoPoint, EARTH_RADIUS_KM};

/// A vector in 3-D space, with the origin at the center of Earth,
/// the x axis pointing towards (0°, 0°), the y axis towards (90° E, 0°)
/// and the z axis towards the North Pole. Units are kilometers.
///
/// Vectors converted from a [GeoPoint] lie on a sphere
/// of radius [EARTH_RADIUS_KM]. Vectors built with [CartesianPoint::new] or
/// returned by [CartesianPoint::cross_product] may have any magnitude.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct CartesianPoint {
    x: f64,
    y: f64,
    z: f64,
}

impl CartesianPoint {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn z(&self) -> f64 {
        self.z
    }

    /// Returns the length of this vector.
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Returns the [cross product](https://en.wikipedia.org/wiki/Cross_product) `self × other`.
    ///
    /// The result is normal to both inputs and is generally not a point on Earth's surface.
    pub fn cross_product(&self, other: &Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Projects the direction of this vector onto Earth's surface.
    ///
    /// The magnitude of the vector is irrelevant. The zero vector has no direction,
    /// and is mapped to (0°, 0°).
    pub fn to_geo_point(&self) -> GeoPoint {
        let radius = self.magnitude();
        let lon = self.y.atan2(self.x).to_degrees();
        let lat = if radius == 0.0 {
            0.0
        } else {
            // Rounding can push the ratio just outside of asin's domain
            (self.z / radius).clamp(-1.0, 1.0).asin().to_degrees()
        };
        GeoPoint { lon, lat }
    }

    /// Alternative to [CartesianPoint::to_geo_point] which computes the polar angle
    /// with `atan2` instead of `asin`. Total for all inputs, but maps the zero
    /// vector to the North Pole.
    pub fn as_spherical_point(&self) -> GeoPoint {
        // Angle from the North Pole down to the point
        let phi = (self.x * self.x + self.y * self.y).sqrt().atan2(self.z);
        // Angle from Greenwich to the point
        let theta = self.y.atan2(self.x);
        GeoPoint {
            lon: theta.to_degrees(),
            lat: 90.0 - phi.to_degrees(),
        }
    }
}

impl From<GeoPoint> for CartesianPoint {
    fn from(p: GeoPoint) -> Self {
        let phi = (90.0 - p.lat).to_radians();
        let theta = p.lon.to_radians();
        let sin_phi = phi.sin();

        Self {
            x: EARTH_RADIUS_KM * sin_phi * theta.cos(),
            y: EARTH_RADIUS_KM * sin_phi * theta.sin(),
            z: EARTH_RADIUS_KM * phi.cos(),
        }
    }
}

impl From<CartesianPoint> for GeoPoint {
    fn from(c: CartesianPoint) -> Self {
        c.to_geo_point()
    }
}
