use crate::error::{GeometryError, InvalidReason};
use crate::primitives::Coord;

/// A single position, or the empty point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point(Option<Coord>);

impl Point {
    /// Creates a point from ordinates. Non-finite ordinates are rejected
    /// later by validation; use [`Point::try_new`] to reject them here.
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self(Some(Coord::new(x, y)))
    }

    /// Creates a point, rejecting NaN and infinite ordinates.
    pub fn try_new(x: f64, y: f64) -> Result<Self, GeometryError> {
        let c = Coord::new(x, y);
        if !c.is_finite() {
            return Err(GeometryError::invalid(InvalidReason::NonFiniteCoordinate(c)));
        }
        Ok(Self(Some(c)))
    }

    #[inline]
    pub fn empty() -> Self {
        Self(None)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// The position, if the point is not empty.
    #[inline]
    pub fn coord(&self) -> Option<Coord> {
        self.0
    }
}

impl From<Coord> for Point {
    fn from(c: Coord) -> Self {
        Self(Some(c))
    }
}

impl From<Option<Coord>> for Point {
    fn from(c: Option<Coord>) -> Self {
        Self(c)
    }
}
