//! Per-segment buffering of line strings.

use crate::buffer::segment::segment_buffer;
use crate::float_types::Real;
use crate::maybe_rayon::*;
use geo::{Coord, LineString, Polygon};

/// Buffers every consecutive segment of `line` independently, returning one
/// capsule per segment.
///
/// The capsules deliberately overlap at the joints; reconciling them is
/// deferred to the top-level union so that overlaps across the whole feature
/// are resolved in one pass. A line string with fewer than two coordinates
/// contributes no candidates.
pub fn line_buffer(line: &LineString<Real>, radius: Real, resolution: u32) -> Vec<Polygon<Real>> {
    let segments: Vec<(Coord<Real>, Coord<Real>)> =
        line.0.windows(2).map(|pair| (pair[0], pair[1])).collect();

    segments
        .into_par_iter()
        .map(|(start, end)| segment_buffer(start, end, radius, resolution))
        .collect()
}
