//! Exact predicates and the snapping tolerance used by noding.
//!
//! Orientation tests are exact. Constructed points (segment crossings) are
//! not, so the noder merges vertices closer than a tolerance derived from the
//! magnitude of the input coordinates.

mod predicates;

pub use predicates::{
    crossing_point, orient2d, point_on_segment, segments_intersect, Orientation,
    SegmentIntersection,
};

use crate::bounds::Envelope;

/// Snap distance per unit of coordinate magnitude.
pub const SNAP_TOLERANCE_FACTOR: f64 = 1e-10;

/// Snapping tolerance for a working set with the given extent.
///
/// Scales with the largest ordinate so that the tolerance stays a fixed
/// number of ulps above the rounding error of constructed points.
pub fn snap_tolerance(extent: Option<Envelope>) -> f64 {
    let magnitude = extent.map_or(0.0, |env| env.max_magnitude().max(env.diameter()));
    (magnitude * SNAP_TOLERANCE_FACTOR).max(f64::MIN_POSITIVE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::Coord;

    #[test]
    fn test_snap_tolerance_scales() {
        let small = Envelope::from_corners(Coord::new(0.0, 0.0), Coord::new(1.0, 1.0));
        let large = Envelope::from_corners(Coord::new(1e6, 1e6), Coord::new(1e6 + 1.0, 1e6 + 1.0));
        assert!(snap_tolerance(Some(large)) > snap_tolerance(Some(small)));
        assert!(snap_tolerance(Some(small)) < 1e-9);
    }

    #[test]
    fn test_snap_tolerance_is_positive() {
        assert!(snap_tolerance(None) > 0.0);
        let point = Envelope::from_coord(Coord::new(0.0, 0.0));
        assert!(snap_tolerance(Some(point)) > 0.0);
    }
}
