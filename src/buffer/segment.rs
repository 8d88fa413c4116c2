//! Capsule construction around a single line segment.

use crate::float_types::Real;
use crate::geodesic;
use geo::{Coord, LineString, Polygon};

/// Number of arc samples per semicircular end cap.
///
/// Below 1 (i.e. `resolution < 2`) the caps degenerate to straight chords
/// between the corner offsets; that is deliberate edge-case behavior, not an
/// error.
pub(crate) const fn spoke_num(resolution: u32) -> u32 {
    resolution / 2
}

/// Builds the capsule of `radius` meters around the segment `start -> end`:
/// two edges parallel to the segment joined by semicircular caps of
/// [`spoke_num`] samples each.
///
/// Ring order: the left edge start-to-end, a 180° sweep around `end` from
/// its left corner to its right, the right edge end-to-start, then the
/// mirror sweep around `start`. `Polygon::new` closes the ring back at the
/// starting left corner.
pub fn segment_buffer(
    start: Coord<Real>,
    end: Coord<Real>,
    radius: Real,
    resolution: u32,
) -> Polygon<Real> {
    let direction = geodesic::bearing(start, end);

    let start_left = geodesic::destination(start, direction - 90.0, radius);
    let start_right = geodesic::destination(start, direction + 90.0, radius);
    let end_left = geodesic::destination(end, direction - 90.0, radius);
    let end_right = geodesic::destination(end, direction + 90.0, radius);

    let spokes = spoke_num(resolution);
    let mut ring: Vec<Coord<Real>> =
        Vec::with_capacity(4 + 2 * spokes.saturating_sub(1) as usize + 1);

    // Straight edge parallel to the segment, on its left side.
    ring.push(start_left);
    ring.push(end_left);

    // Far cap: sweep 180° around `end`, from the left corner toward the right.
    let far_start = geodesic::bearing(end, end_left);
    for k in 1..spokes {
        let spoke_direction = far_start + 180.0 * (k as Real / spokes as Real);
        ring.push(geodesic::destination(end, spoke_direction, radius));
    }

    // Right edge, walked back toward the start.
    ring.push(end_right);
    ring.push(start_right);

    // Near cap: mirror sweep around `start`, right corner back to the left.
    let near_start = geodesic::bearing(start, start_right);
    for k in 1..spokes {
        let spoke_direction = near_start + 180.0 * (k as Real / spokes as Real);
        ring.push(geodesic::destination(start, spoke_direction, radius));
    }

    Polygon::new(LineString::from(ring), Vec::new())
}
