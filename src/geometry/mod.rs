//! The planar geometry model.
//!
//! A [`Geometry`] is a closed tagged union over the OGC simple-feature
//! variants. Every variant may be empty, and an empty geometry is a valid
//! value distinct from the absence of a geometry. Geometries own their
//! coordinates; every engine operation returns a freshly built value.
//!
//! # Example
//!
//! ```
//! use planum::geometry::{Geometry, LinearRing, Polygon};
//! use planum::Coord;
//!
//! let ring = LinearRing::from_vertices(vec![
//!     Coord::new(0.0, 0.0),
//!     Coord::new(4.0, 0.0),
//!     Coord::new(4.0, 3.0),
//!     Coord::new(0.0, 3.0),
//! ])
//! .unwrap();
//! let polygon = Geometry::from(Polygon::new(ring, vec![]));
//!
//! assert_eq!(polygon.area(), 12.0);
//! assert_eq!(polygon.length(), 14.0);
//! assert_eq!(polygon.to_string(), "POLYGON ((0 0, 4 0, 4 3, 0 3, 0 0))");
//! ```

mod linestring;
mod multi;
mod point;
mod polygon;
mod validate;
mod wkt;

pub use linestring::{LineString, LinearRing};
pub use multi::{GeometryCollection, MultiLineString, MultiPoint, MultiPolygon};
pub use point::Point;
pub use polygon::Polygon;
pub use validate::ValidationMode;

pub(crate) use linestring::signed_area;

use crate::bounds::Envelope;
use crate::primitives::Coord;

/// Topological dimension of a point set, ordered from empty to area.
///
/// Rendered in DE-9IM codes as `F`, `0`, `1` and `2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Dimension {
    /// The empty set.
    Empty,
    /// Zero-dimensional (points).
    Point,
    /// One-dimensional (curves).
    Line,
    /// Two-dimensional (surfaces).
    Area,
}

impl Dimension {
    /// DE-9IM symbol for this dimension.
    pub fn symbol(self) -> char {
        match self {
            Dimension::Empty => 'F',
            Dimension::Point => '0',
            Dimension::Line => '1',
            Dimension::Area => '2',
        }
    }
}

/// Position of a point relative to a geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Location {
    Interior,
    Boundary,
    Exterior,
}

impl Location {
    /// Row/column index in an intersection matrix.
    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            Location::Interior => 0,
            Location::Boundary => 1,
            Location::Exterior => 2,
        }
    }
}

/// Any planar geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Point),
    LineString(LineString),
    LinearRing(LinearRing),
    Polygon(Polygon),
    MultiPoint(MultiPoint),
    MultiLineString(MultiLineString),
    MultiPolygon(MultiPolygon),
    GeometryCollection(GeometryCollection),
}

/// Non-empty atomic components of a geometry, grouped by dimension.
#[derive(Debug, Default)]
pub(crate) struct Parts<'a> {
    pub points: Vec<Coord>,
    pub lines: Vec<&'a [Coord]>,
    pub polygons: Vec<&'a Polygon>,
}

impl<'a> Parts<'a> {
    fn collect(&mut self, geom: &'a Geometry) {
        match geom {
            Geometry::Point(p) => self.points.extend(p.coord()),
            Geometry::LineString(ls) if !ls.is_empty() => self.lines.push(ls.coords()),
            Geometry::LinearRing(r) if !r.is_empty() => self.lines.push(r.coords()),
            Geometry::Polygon(p) if !p.is_empty() => self.polygons.push(p),
            Geometry::MultiPoint(mp) => self.points.extend(mp.0.iter().filter_map(Point::coord)),
            Geometry::MultiLineString(mls) => self
                .lines
                .extend(mls.0.iter().filter(|l| !l.is_empty()).map(LineString::coords)),
            Geometry::MultiPolygon(mp) => {
                self.polygons.extend(mp.0.iter().filter(|p| !p.is_empty()))
            }
            Geometry::GeometryCollection(gc) => {
                for g in &gc.0 {
                    self.collect(g);
                }
            }
            _ => {}
        }
    }
}

impl Geometry {
    /// The empty geometry of a given dimension: `POLYGON EMPTY`,
    /// `LINESTRING EMPTY`, `POINT EMPTY` or `GEOMETRYCOLLECTION EMPTY`.
    pub fn empty(dimension: Dimension) -> Self {
        match dimension {
            Dimension::Area => Polygon::empty().into(),
            Dimension::Line => LineString::empty().into(),
            Dimension::Point => Point::empty().into(),
            Dimension::Empty => GeometryCollection::default().into(),
        }
    }

    /// Returns `true` when the geometry contains no coordinates.
    pub fn is_empty(&self) -> bool {
        match self {
            Geometry::Point(g) => g.is_empty(),
            Geometry::LineString(g) => g.is_empty(),
            Geometry::LinearRing(g) => g.is_empty(),
            Geometry::Polygon(g) => g.is_empty(),
            Geometry::MultiPoint(g) => g.is_empty(),
            Geometry::MultiLineString(g) => g.is_empty(),
            Geometry::MultiPolygon(g) => g.is_empty(),
            Geometry::GeometryCollection(g) => g.is_empty(),
        }
    }

    /// Nominal dimension of the variant; for collections, the highest
    /// dimension among their members.
    pub fn dimension(&self) -> Dimension {
        match self {
            Geometry::Point(_) | Geometry::MultiPoint(_) => Dimension::Point,
            Geometry::LineString(_) | Geometry::LinearRing(_) | Geometry::MultiLineString(_) => {
                Dimension::Line
            }
            Geometry::Polygon(_) | Geometry::MultiPolygon(_) => Dimension::Area,
            Geometry::GeometryCollection(gc) => gc
                .0
                .iter()
                .map(Geometry::dimension)
                .max()
                .unwrap_or(Dimension::Empty),
        }
    }

    /// Upper-case WKT type name.
    pub fn type_name(&self) -> &'static str {
        match self {
            Geometry::Point(_) => "POINT",
            Geometry::LineString(_) => "LINESTRING",
            Geometry::LinearRing(_) => "LINEARRING",
            Geometry::Polygon(_) => "POLYGON",
            Geometry::MultiPoint(_) => "MULTIPOINT",
            Geometry::MultiLineString(_) => "MULTILINESTRING",
            Geometry::MultiPolygon(_) => "MULTIPOLYGON",
            Geometry::GeometryCollection(_) => "GEOMETRYCOLLECTION",
        }
    }

    pub(crate) fn parts(&self) -> Parts<'_> {
        let mut parts = Parts::default();
        parts.collect(self);
        parts
    }

    /// Every coordinate in traversal order, ring closures included.
    pub fn coords(&self) -> Vec<Coord> {
        let parts = self.parts();
        let mut out = parts.points.clone();
        for line in &parts.lines {
            out.extend_from_slice(line);
        }
        for poly in &parts.polygons {
            for ring in poly.rings() {
                out.extend_from_slice(ring.coords());
            }
        }
        out
    }

    pub fn num_points(&self) -> usize {
        self.coords().len()
    }

    /// Bounding box, or `None` for an empty geometry.
    pub fn bounds(&self) -> Option<Envelope> {
        Envelope::from_coords(self.coords())
    }

    /// Total enclosed area of the polygonal components.
    pub fn area(&self) -> f64 {
        self.parts().polygons.iter().map(|p| p.area()).sum()
    }

    /// Total length of the lineal components plus polygon perimeters.
    pub fn length(&self) -> f64 {
        let parts = self.parts();
        let lines: f64 = parts
            .lines
            .iter()
            .map(|l| l.windows(2).map(|w| w[0].distance(w[1])).sum::<f64>())
            .sum();
        let rings: f64 = parts.polygons.iter().map(|p| p.perimeter()).sum();
        lines + rings
    }

    /// Builds the tightest result type for a set of components.
    ///
    /// A single component is returned as itself, a homogeneous set as the
    /// matching multi-variant, and mixed dimensions as a collection ordered
    /// polygons, lines, points. With no components the empty geometry of
    /// `empty_dimension` is returned.
    pub(crate) fn assemble(
        mut polygons: Vec<Polygon>,
        mut lines: Vec<LineString>,
        mut points: Vec<Point>,
        empty_dimension: Dimension,
    ) -> Self {
        let kinds = [!polygons.is_empty(), !lines.is_empty(), !points.is_empty()]
            .iter()
            .filter(|k| **k)
            .count();

        match kinds {
            0 => Geometry::empty(empty_dimension),
            1 if polygons.len() == 1 => polygons.remove(0).into(),
            1 if lines.len() == 1 => lines.remove(0).into(),
            1 if points.len() == 1 => points.remove(0).into(),
            1 if !polygons.is_empty() => MultiPolygon(polygons).into(),
            1 if !lines.is_empty() => MultiLineString(lines).into(),
            1 => MultiPoint(points).into(),
            _ => {
                let mut members: Vec<Geometry> = Vec::new();
                members.extend(polygons.into_iter().map(Geometry::from));
                members.extend(lines.into_iter().map(Geometry::from));
                members.extend(points.into_iter().map(Geometry::from));
                GeometryCollection(members).into()
            }
        }
    }
}

macro_rules! impl_from_variant {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for Geometry {
                fn from(g: $variant) -> Self {
                    Geometry::$variant(g)
                }
            }
        )*
    };
}

impl_from_variant!(
    Point,
    LineString,
    LinearRing,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection
);
