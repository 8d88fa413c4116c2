//! Candidate merging via `geo`'s cascaded planar union.
//!
//! Arc sampling makes neighboring candidates overlap and share
//! near-coincident vertices on purpose; `geo`'s boolean-ops engine is
//! responsible for reconciling them, never this crate.

use crate::float_types::Real;
use geo::{Geometry, MultiPolygon, Polygon, unary_union};

/// Merges a set of simple, possibly overlapping candidate polygons into one
/// `Polygon`, or a `MultiPolygon` when the union has multiple disjoint
/// connected components.
///
/// An empty candidate list merges to an empty `MultiPolygon`.
pub fn merge(candidates: Vec<Polygon<Real>>) -> Geometry<Real> {
    if candidates.is_empty() {
        return Geometry::MultiPolygon(MultiPolygon::new(Vec::new()));
    }
    let merged: MultiPolygon<Real> = unary_union(&candidates);
    let mut polygons = merged.0;
    if polygons.len() == 1 {
        Geometry::Polygon(polygons.remove(0))
    } else {
        Geometry::MultiPolygon(MultiPolygon::new(polygons))
    }
}
