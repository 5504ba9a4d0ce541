//! Well-known text rendering.
//!
//! Ordinates are written with Rust's shortest round-trip float formatting,
//! so the text preserves every coordinate bit for bit.

use super::*;
use crate::primitives::Coord;
use std::fmt::{self, Display, Formatter, Write};

fn write_coord(f: &mut Formatter<'_>, c: Coord) -> fmt::Result {
    write!(f, "{} {}", c.x, c.y)
}

fn write_sequence(f: &mut Formatter<'_>, coords: &[Coord]) -> fmt::Result {
    if coords.is_empty() {
        return f.write_str("EMPTY");
    }
    f.write_char('(')?;
    for (i, &c) in coords.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write_coord(f, c)?;
    }
    f.write_char(')')
}

fn write_polygon_body(f: &mut Formatter<'_>, polygon: &Polygon) -> fmt::Result {
    if polygon.is_empty() {
        return f.write_str("EMPTY");
    }
    f.write_char('(')?;
    for (i, ring) in polygon.rings().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write_sequence(f, ring.coords())?;
    }
    f.write_char(')')
}

fn write_list<T>(
    f: &mut Formatter<'_>,
    items: &[T],
    mut item: impl FnMut(&mut Formatter<'_>, &T) -> fmt::Result,
) -> fmt::Result {
    if items.is_empty() {
        return f.write_str("EMPTY");
    }
    f.write_char('(')?;
    for (i, it) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        item(f, it)?;
    }
    f.write_char(')')
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("POINT ")?;
        match self.coord() {
            Some(c) => {
                f.write_char('(')?;
                write_coord(f, c)?;
                f.write_char(')')
            }
            None => f.write_str("EMPTY"),
        }
    }
}

impl Display for LineString {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("LINESTRING ")?;
        write_sequence(f, self.coords())
    }
}

impl Display for LinearRing {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("LINEARRING ")?;
        write_sequence(f, self.coords())
    }
}

impl Display for Polygon {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("POLYGON ")?;
        write_polygon_body(f, self)
    }
}

impl Display for MultiPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("MULTIPOINT ")?;
        write_list(f, &self.0, |f, p| match p.coord() {
            Some(c) => {
                f.write_char('(')?;
                write_coord(f, c)?;
                f.write_char(')')
            }
            None => f.write_str("EMPTY"),
        })
    }
}

impl Display for MultiLineString {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("MULTILINESTRING ")?;
        write_list(f, &self.0, |f, l| write_sequence(f, l.coords()))
    }
}

impl Display for MultiPolygon {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("MULTIPOLYGON ")?;
        write_list(f, &self.0, write_polygon_body)
    }
}

impl Display for GeometryCollection {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("GEOMETRYCOLLECTION ")?;
        write_list(f, &self.0, |f, g| write!(f, "{g}"))
    }
}

impl Display for Geometry {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Geometry::Point(g) => Display::fmt(g, f),
            Geometry::LineString(g) => Display::fmt(g, f),
            Geometry::LinearRing(g) => Display::fmt(g, f),
            Geometry::Polygon(g) => Display::fmt(g, f),
            Geometry::MultiPoint(g) => Display::fmt(g, f),
            Geometry::MultiLineString(g) => Display::fmt(g, f),
            Geometry::MultiPolygon(g) => Display::fmt(g, f),
            Geometry::GeometryCollection(g) => Display::fmt(g, f),
        }
    }
}
