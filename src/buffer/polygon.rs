//! Buffering of polygon boundaries.

use crate::buffer::line::line_buffer;
use crate::float_types::Real;
use geo::Polygon;

/// Buffers every ring of `polygon` — exterior and holes alike — as a line
/// string, and appends the original polygon as a final candidate.
///
/// The ring capsules alone would only cover an annulus around the boundary;
/// the original polygon fills in the interior. Holes are buffered rather
/// than shrunk, matching the boundary-centric definition of the buffer.
pub fn polygon_buffer(polygon: &Polygon<Real>, radius: Real, resolution: u32) -> Vec<Polygon<Real>> {
    let mut candidates: Vec<Polygon<Real>> = std::iter::once(polygon.exterior())
        .chain(polygon.interiors())
        .flat_map(|ring| line_buffer(ring, radius, resolution))
        .collect();
    candidates.push(polygon.clone());
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::polygon;

    #[test]
    fn candidates_cover_every_ring_plus_the_polygon_itself() {
        let poly = polygon![
            exterior: [
                (x: 0.0, y: 0.0),
                (x: 0.1, y: 0.0),
                (x: 0.1, y: 0.1),
                (x: 0.0, y: 0.1),
            ],
            interiors: [[
                (x: 0.04, y: 0.04),
                (x: 0.06, y: 0.04),
                (x: 0.06, y: 0.06),
                (x: 0.04, y: 0.06),
            ]],
        ];
        let candidates = polygon_buffer(&poly, 200.0, 8);
        // Closed 4-vertex rings carry 4 segments each: 4 exterior capsules,
        // 4 hole capsules, plus the original polygon.
        assert_eq!(candidates.len(), 9);
        assert_eq!(candidates.last(), Some(&poly));
    }
}
