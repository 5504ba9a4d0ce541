//! Error types for planum operations.
//!
//! Empty geometries are never errors: an operation whose result covers no
//! points returns an empty geometry of the appropriate type.

use crate::primitives::Coord;
use thiserror::Error;

/// Errors that can occur while constructing or operating on geometries.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// The input violates a structural or topological invariant.
    #[error("invalid geometry: {reason}")]
    InvalidGeometry {
        /// What is wrong with the input.
        reason: InvalidReason,
    },

    /// The overlay machinery could not build a consistent planar graph.
    #[error("overlay failed: {reason}")]
    Overlay {
        /// Why the graph could not be resolved.
        reason: OverlayFailure,
    },

    /// A parameter passed to an operation is out of range.
    #[error("invalid argument `{name}`: {message}")]
    InvalidArgument {
        /// Name of the offending parameter.
        name: &'static str,
        /// Description of the accepted range.
        message: String,
    },
}

impl GeometryError {
    pub(crate) fn invalid(reason: InvalidReason) -> Self {
        Self::InvalidGeometry { reason }
    }

    pub(crate) fn overlay(reason: OverlayFailure) -> Self {
        Self::Overlay { reason }
    }
}

/// Reasons a geometry is rejected as invalid.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidReason {
    /// A coordinate is NaN or infinite.
    #[error("non-finite coordinate ({}, {})", .0.x, .0.y)]
    NonFiniteCoordinate(Coord),

    /// A line string has fewer than two coordinates.
    #[error("line string needs at least 2 coordinates, got {count}")]
    TooFewLinePoints {
        /// Number of coordinates supplied.
        count: usize,
    },

    /// A ring has fewer than four coordinates (closure included).
    #[error("ring needs at least 4 coordinates, got {count}")]
    TooFewRingPoints {
        /// Number of coordinates supplied.
        count: usize,
    },

    /// A ring's first and last coordinates differ.
    #[error("ring is not closed")]
    RingNotClosed,

    /// A ring crosses or touches itself.
    #[error("ring self-intersection at ({}, {})", .0.x, .0.y)]
    RingSelfIntersection(Coord),

    /// Two rings of the same polygon cross or overlap.
    #[error("rings cross at ({}, {})", .0.x, .0.y)]
    RingsCross(Coord),

    /// A ring encloses no area.
    #[error("ring has zero area")]
    ZeroAreaRing,

    /// A hole lies outside its polygon's exterior ring.
    #[error("hole lies outside the exterior ring")]
    HoleOutsideShell,

    /// A hole lies inside another hole of the same polygon.
    #[error("hole nested inside another hole at ({}, {})", .0.x, .0.y)]
    NestedHoles(Coord),

    /// Ring winding does not follow the exterior-CCW / hole-CW convention.
    #[error("{ring} ring has the wrong orientation")]
    WrongOrientation {
        /// `"exterior"` or `"interior"`.
        ring: &'static str,
    },
}

/// Reasons the overlay graph could not be resolved.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OverlayFailure {
    /// Noding kept discovering new intersections.
    #[error("noding did not converge after {iterations} iterations")]
    NodingDidNotConverge {
        /// Number of noding passes attempted.
        iterations: usize,
    },

    /// A node has a different number of incoming and outgoing result edges.
    #[error("unbalanced result edges at ({}, {})", .0.x, .0.y)]
    UnbalancedNode(Coord),

    /// Ring tracing returned to a used edge before closing.
    #[error("result ring does not close at ({}, {})", .0.x, .0.y)]
    UnclosedRing(Coord),

    /// A hole ring was found with no enclosing shell.
    #[error("hole at ({}, {}) has no enclosing shell", .0.x, .0.y)]
    HoleWithoutShell(Coord),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = GeometryError::invalid(InvalidReason::TooFewRingPoints { count: 3 });
        assert_eq!(
            err.to_string(),
            "invalid geometry: ring needs at least 4 coordinates, got 3"
        );

        let err = GeometryError::overlay(OverlayFailure::NodingDidNotConverge { iterations: 8 });
        assert_eq!(
            err.to_string(),
            "overlay failed: noding did not converge after 8 iterations"
        );
    }

    #[test]
    fn test_coordinate_in_message() {
        let err = InvalidReason::RingSelfIntersection(Coord::new(1.0, 2.5));
        assert_eq!(err.to_string(), "ring self-intersection at (1, 2.5)");
    }
}
