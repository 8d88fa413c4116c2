//! Narrow seam over `geo`'s haversine primitives.
//!
//! Everything above this module works in `Coord`s, meters, and bearings in
//! degrees clockwise from north; everything below is `geo`'s spherical math.

use crate::float_types::Real;
use geo::{Bearing, Coord, Destination, Haversine, Point};

/// Point at `distance` meters from `origin` along the initial bearing
/// `bearing_degrees`.
pub fn destination(origin: Coord<Real>, bearing_degrees: Real, distance: Real) -> Coord<Real> {
    Haversine.destination(Point(origin), bearing_degrees, distance).0
}

/// Initial bearing in degrees from `a` to `b`.
pub fn bearing(a: Coord<Real>, b: Coord<Real>) -> Real {
    Haversine.bearing(Point(a), Point(b))
}
