//! Disc approximation around a single point.

use crate::float_types::Real;
use crate::geodesic;
use geo::{Coord, LineString, Polygon};

/// Approximates the disc of `radius` meters around `center` as a regular
/// `resolution`-gon.
///
/// Vertices are emitted in increasing-bearing order, starting due north, one
/// per `360 / resolution` degree step; `Polygon::new` closes the ring. A
/// `resolution` below 3 yields a degenerate (zero-area) polygon, which is
/// tolerated and left for the union step to absorb.
pub fn point_buffer(center: Coord<Real>, radius: Real, resolution: u32) -> Polygon<Real> {
    let step = 360.0 / resolution as Real;
    let ring: Vec<Coord<Real>> = (0..resolution)
        .map(|i| geodesic::destination(center, i as Real * step, radius))
        .collect();
    Polygon::new(LineString::from(ring), Vec::new())
}
