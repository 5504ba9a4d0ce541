//! Axis-aligned bounding box.

use crate::primitives::Coord;

/// An axis-aligned rectangle bounding a set of coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Envelope {
    /// Minimum corner (smallest x and y values).
    pub min: Coord,
    /// Maximum corner (largest x and y values).
    pub max: Coord,
}

impl Envelope {
    /// Creates an envelope from two arbitrary corners.
    #[inline]
    pub fn from_corners(a: Coord, b: Coord) -> Self {
        Self {
            min: Coord::new(a.x.min(b.x), a.y.min(b.y)),
            max: Coord::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Envelope of a single coordinate.
    #[inline]
    pub fn from_coord(c: Coord) -> Self {
        Self { min: c, max: c }
    }

    /// Smallest envelope containing every coordinate, or `None` when the
    /// iterator is empty.
    pub fn from_coords<I>(coords: I) -> Option<Self>
    where
        I: IntoIterator<Item = Coord>,
    {
        let mut iter = coords.into_iter();
        let first = iter.next()?;
        Some(iter.fold(Self::from_coord(first), Self::expand_to_include))
    }

    #[inline]
    pub fn width(self) -> f64 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(self) -> f64 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn center(self) -> Coord {
        self.min.midpoint(self.max)
    }

    /// Length of the diagonal.
    #[inline]
    pub fn diameter(self) -> f64 {
        self.min.distance(self.max)
    }

    #[inline]
    pub fn expand_to_include(self, c: Coord) -> Self {
        Self {
            min: Coord::new(self.min.x.min(c.x), self.min.y.min(c.y)),
            max: Coord::new(self.max.x.max(c.x), self.max.y.max(c.y)),
        }
    }

    /// Grows the envelope by `delta` on every side.
    #[inline]
    pub fn expand_by(self, delta: f64) -> Self {
        Self {
            min: Coord::new(self.min.x - delta, self.min.y - delta),
            max: Coord::new(self.max.x + delta, self.max.y + delta),
        }
    }

    #[inline]
    pub fn union(self, other: Self) -> Self {
        self.expand_to_include(other.min).expand_to_include(other.max)
    }

    /// Closed containment test.
    #[inline]
    pub fn contains(self, c: Coord) -> bool {
        c.x >= self.min.x && c.x <= self.max.x && c.y >= self.min.y && c.y <= self.max.y
    }

    /// Returns `true` if the closed boxes share at least one point.
    #[inline]
    pub fn intersects(self, other: Self) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }

    /// Largest absolute ordinate, used to scale tolerances.
    #[inline]
    pub fn max_magnitude(self) -> f64 {
        self.min
            .x
            .abs()
            .max(self.min.y.abs())
            .max(self.max.x.abs())
            .max(self.max.y.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_coords() {
        let env = Envelope::from_coords(vec![
            Coord::new(1.0, 5.0),
            Coord::new(-2.0, 3.0),
            Coord::new(4.0, -1.0),
        ])
        .unwrap();
        assert_eq!(env.min, Coord::new(-2.0, -1.0));
        assert_eq!(env.max, Coord::new(4.0, 5.0));
        assert_eq!(env.width(), 6.0);
        assert_eq!(env.height(), 6.0);
        assert!(Envelope::from_coords(Vec::new()).is_none());
    }

    #[test]
    fn test_intersects_touching() {
        let a = Envelope::from_corners(Coord::new(0.0, 0.0), Coord::new(1.0, 1.0));
        let b = Envelope::from_corners(Coord::new(1.0, 1.0), Coord::new(2.0, 2.0));
        let c = Envelope::from_corners(Coord::new(1.5, 0.0), Coord::new(2.0, 0.5));
        assert!(a.intersects(b));
        assert!(!a.intersects(c));
        assert!(a.expand_by(0.5).intersects(c));
    }

    #[test]
    fn test_contains_and_union() {
        let a = Envelope::from_corners(Coord::new(2.0, 2.0), Coord::new(0.0, 0.0));
        assert!(a.contains(Coord::new(2.0, 1.0)));
        assert!(!a.contains(Coord::new(2.1, 1.0)));
        let u = a.union(Envelope::from_coord(Coord::new(-1.0, 3.0)));
        assert_eq!(u.min, Coord::new(-1.0, 0.0));
        assert_eq!(u.max, Coord::new(2.0, 3.0));
        assert_eq!(u.max_magnitude(), 3.0);
    }
}
