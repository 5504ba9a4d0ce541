use crate::bounds::Envelope;
use crate::error::{GeometryError, InvalidReason};
use crate::primitives::{Coord, Segment2};

fn check_finite(coords: &[Coord]) -> Result<(), GeometryError> {
    match coords.iter().find(|c| !c.is_finite()) {
        Some(&c) => Err(GeometryError::invalid(InvalidReason::NonFiniteCoordinate(c))),
        None => Ok(()),
    }
}

/// An open or closed polyline of at least two coordinates, or empty.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineString {
    coords: Vec<Coord>,
}

impl LineString {
    /// Creates a line string. Accepts zero coordinates (empty) or two and more.
    pub fn new(coords: Vec<Coord>) -> Result<Self, GeometryError> {
        if coords.len() == 1 {
            return Err(GeometryError::invalid(InvalidReason::TooFewLinePoints {
                count: 1,
            }));
        }
        check_finite(&coords)?;
        Ok(Self { coords })
    }

    #[inline]
    pub fn empty() -> Self {
        Self { coords: Vec::new() }
    }

    /// Wraps coordinates already known to satisfy the invariants.
    pub(crate) fn from_coords_unchecked(coords: Vec<Coord>) -> Self {
        debug_assert!(coords.len() != 1);
        Self { coords }
    }

    #[inline]
    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Returns `true` for a non-empty line whose ends coincide.
    pub fn is_closed(&self) -> bool {
        match (self.coords.first(), self.coords.last()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    #[inline]
    pub fn start(&self) -> Option<Coord> {
        self.coords.first().copied()
    }

    #[inline]
    pub fn end(&self) -> Option<Coord> {
        self.coords.last().copied()
    }

    /// Consecutive segments, including zero-length ones.
    pub fn segments(&self) -> impl Iterator<Item = Segment2<f64>> + '_ {
        self.coords.windows(2).map(|w| Segment2::new(w[0], w[1]))
    }

    pub fn length(&self) -> f64 {
        self.segments().map(Segment2::length).sum()
    }

    pub fn envelope(&self) -> Option<Envelope> {
        Envelope::from_coords(self.coords.iter().copied())
    }

    pub fn into_coords(self) -> Vec<Coord> {
        self.coords
    }
}

/// A closed line string of at least four coordinates (first equals last),
/// or empty. Used as polygon shells and holes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LinearRing {
    coords: Vec<Coord>,
}

impl LinearRing {
    /// Creates a ring from a closed coordinate sequence.
    pub fn new(coords: Vec<Coord>) -> Result<Self, GeometryError> {
        if coords.is_empty() {
            return Ok(Self::empty());
        }
        check_finite(&coords)?;
        if coords.first() != coords.last() {
            return Err(GeometryError::invalid(InvalidReason::RingNotClosed));
        }
        if coords.len() < 4 {
            return Err(GeometryError::invalid(InvalidReason::TooFewRingPoints {
                count: coords.len(),
            }));
        }
        Ok(Self { coords })
    }

    /// Creates a ring from its vertices, appending the closing coordinate
    /// when the sequence is open.
    pub fn from_vertices(mut vertices: Vec<Coord>) -> Result<Self, GeometryError> {
        if let (Some(&first), Some(&last)) = (vertices.first(), vertices.last()) {
            if first != last || vertices.len() == 1 {
                vertices.push(first);
            }
        }
        Self::new(vertices)
    }

    #[inline]
    pub fn empty() -> Self {
        Self { coords: Vec::new() }
    }

    pub(crate) fn from_coords_unchecked(coords: Vec<Coord>) -> Self {
        debug_assert!(coords.is_empty() || (coords.len() >= 4 && coords.first() == coords.last()));
        Self { coords }
    }

    /// The closed coordinate sequence.
    #[inline]
    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    pub fn segments(&self) -> impl Iterator<Item = Segment2<f64>> + '_ {
        self.coords.windows(2).map(|w| Segment2::new(w[0], w[1]))
    }

    /// Shoelace area; positive for counter-clockwise rings.
    pub fn signed_area(&self) -> f64 {
        signed_area(&self.coords)
    }

    #[inline]
    pub fn is_ccw(&self) -> bool {
        self.signed_area() > 0.0
    }

    pub fn length(&self) -> f64 {
        self.segments().map(Segment2::length).sum()
    }

    /// The same ring traversed in the opposite direction.
    pub fn reversed(&self) -> Self {
        let mut coords = self.coords.clone();
        coords.reverse();
        Self { coords }
    }

    pub fn envelope(&self) -> Option<Envelope> {
        Envelope::from_coords(self.coords.iter().copied())
    }

    pub fn to_line_string(&self) -> LineString {
        LineString::from_coords_unchecked(self.coords.clone())
    }
}

/// Shoelace signed area of a closed coordinate sequence, translated to its
/// first vertex for precision.
pub(crate) fn signed_area(coords: &[Coord]) -> f64 {
    if coords.len() < 4 {
        return 0.0;
    }
    let origin = coords[0];
    let mut sum = 0.0;
    for w in coords.windows(2) {
        let a = w[0] - origin;
        let b = w[1] - origin;
        sum += a.cross(b);
    }
    sum / 2.0
}
