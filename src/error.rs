// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use crate::geometry::GeometryKind;

/// Error returned when an argument passed to a spherical geography function
/// is outside of its domain.
///
/// This is the only failure mode of the crate - everything else is a total
/// function over validated inputs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidArgument {
    /// Latitude is not finite or outside of [-90, 90].
    #[error("Latitude must be between -90 and 90 (got {0})")]
    Latitude(f64),

    /// Longitude is not finite or outside of [-180, 180].
    #[error("Longitude must be between -180 and 180 (got {0})")]
    Longitude(f64),

    /// A function received a geometry of a kind it does not support.
    #[error(
        "When applied to SphericalGeography inputs, {function} only supports {}. Input type is: {actual}",
        join_kinds(.allowed)
    )]
    GeometryKind {
        function: &'static str,
        allowed: &'static [GeometryKind],
        actual: GeometryKind,
    },
}

fn join_kinds(kinds: &[GeometryKind]) -> String {
    kinds
        .iter()
        .map(|k| k.as_str())
        .collect::<Vec<_>>()
        .join(" or ")
}
