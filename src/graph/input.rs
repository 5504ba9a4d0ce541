//! An operand prepared for graph construction.

use std::collections::HashMap;

use crate::algorithm::locate::locate_in_polygon;
use crate::bounds::Envelope;
use crate::error::GeometryError;
use crate::geometry::{Dimension, Geometry, Location, Polygon, ValidationMode};
use crate::noding::coord_key;
use crate::primitives::Coord;

/// A validated operand split into its atomic parts.
///
/// Polygons are re-oriented so shells run counter-clockwise and holes
/// clockwise, putting every polygon interior on the left of its rings. Lines
/// have repeated consecutive coordinates removed; a line that collapses to a
/// single coordinate is kept as a point.
#[derive(Debug, Clone, Default)]
pub(crate) struct InputGeometry {
    pub polygons: Vec<Polygon>,
    pub lines: Vec<Vec<Coord>>,
    pub points: Vec<Coord>,
}

impl InputGeometry {
    /// Validates `geometry` and splits it into parts.
    pub fn new(geometry: &Geometry) -> Result<Self, GeometryError> {
        geometry.validate(ValidationMode::Lenient)?;
        let parts = geometry.parts();
        Ok(Self::from_parts(
            parts.polygons.into_iter().cloned().collect(),
            parts.lines.into_iter().map(<[Coord]>::to_vec).collect(),
            parts.points,
        ))
    }

    /// Builds an operand from parts already known to be valid.
    pub fn from_parts(polygons: Vec<Polygon>, lines: Vec<Vec<Coord>>, mut points: Vec<Coord>) -> Self {
        let polygons = polygons
            .iter()
            .filter(|p| !p.is_empty())
            .map(Polygon::oriented)
            .collect();

        let mut kept = Vec::with_capacity(lines.len());
        for mut line in lines {
            line.dedup();
            match line.len() {
                0 => {}
                1 => points.push(line[0]),
                _ => kept.push(line),
            }
        }

        Self {
            polygons,
            lines: kept,
            points,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty() && self.lines.is_empty() && self.points.is_empty()
    }

    /// Highest dimension present.
    pub fn dimension(&self) -> Dimension {
        if !self.polygons.is_empty() {
            Dimension::Area
        } else if !self.lines.is_empty() {
            Dimension::Line
        } else if !self.points.is_empty() {
            Dimension::Point
        } else {
            Dimension::Empty
        }
    }

    pub fn envelope(&self) -> Option<Envelope> {
        let rings = self
            .polygons
            .iter()
            .flat_map(|p| p.exterior().coords().iter().copied());
        let lines = self.lines.iter().flat_map(|l| l.iter().copied());
        Envelope::from_coords(rings.chain(lines).chain(self.points.iter().copied()))
    }

    /// Line endpoints shared by an odd number of line ends (the mod-2 rule).
    pub fn line_boundary(&self) -> Vec<Coord> {
        let mut counts: HashMap<(u64, u64), (Coord, usize)> = HashMap::new();
        let mut order = Vec::new();
        for line in &self.lines {
            for end in [line[0], line[line.len() - 1]] {
                let entry = counts.entry(coord_key(end)).or_insert_with(|| {
                    order.push(coord_key(end));
                    (end, 0)
                });
                entry.1 += 1;
            }
        }
        order
            .into_iter()
            .filter_map(|k| counts.get(&k).filter(|(_, n)| n % 2 == 1).map(|(c, _)| *c))
            .collect()
    }

    /// Location of `p` relative to the union of the polygonal parts.
    pub fn area_location(&self, p: Coord, tolerance: f64) -> Location {
        let mut location = Location::Exterior;
        for polygon in &self.polygons {
            match locate_in_polygon(polygon, p, tolerance) {
                Location::Interior => return Location::Interior,
                Location::Boundary => location = Location::Boundary,
                Location::Exterior => {}
            }
        }
        location
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{GeometryCollection, LineString, Point};

    #[test]
    fn test_parts_are_split_and_oriented() {
        let cw = Polygon::rectangle(Coord::new(0.0, 0.0), Coord::new(2.0, 2.0));
        let cw = Polygon::new(cw.exterior().reversed(), vec![]);
        let gc = Geometry::from(GeometryCollection(vec![
            cw.into(),
            LineString::new(vec![Coord::new(5.0, 5.0), Coord::new(5.0, 5.0)])
                .unwrap()
                .into(),
            Point::new(9.0, 9.0).into(),
        ]));

        let input = InputGeometry::new(&gc).unwrap();
        assert_eq!(input.polygons.len(), 1);
        assert!(input.polygons[0].exterior().is_ccw());
        assert!(input.lines.is_empty());
        assert_eq!(input.points.len(), 2);
        assert_eq!(input.dimension(), Dimension::Area);
    }

    #[test]
    fn test_area_location() {
        let input = InputGeometry::new(&Polygon::rectangle(Coord::new(0.0, 0.0), Coord::new(2.0, 2.0)).into())
            .unwrap();
        assert_eq!(input.area_location(Coord::new(1.0, 1.0), 0.0), Location::Interior);
        assert_eq!(input.area_location(Coord::new(2.0, 1.0), 0.0), Location::Boundary);
        assert_eq!(input.area_location(Coord::new(3.0, 1.0), 0.0), Location::Exterior);
    }

    #[test]
    fn test_line_boundary_mod_2() {
        let input = InputGeometry::from_parts(
            vec![],
            vec![
                vec![Coord::new(0.0, 0.0), Coord::new(1.0, 0.0)],
                vec![Coord::new(1.0, 0.0), Coord::new(2.0, 0.0)],
                vec![Coord::new(5.0, 5.0), Coord::new(6.0, 5.0), Coord::new(5.0, 6.0), Coord::new(5.0, 5.0)],
            ],
            vec![],
        );
        assert_eq!(input.line_boundary(), vec![Coord::new(0.0, 0.0), Coord::new(2.0, 0.0)]);
    }

    #[test]
    fn test_invalid_input_rejected() {
        let bowtie = Polygon::new(
            crate::geometry::LinearRing::from_vertices(vec![
                Coord::new(0.0, 0.0),
                Coord::new(2.0, 2.0),
                Coord::new(2.0, 0.0),
                Coord::new(0.0, 3.0),
            ])
            .unwrap(),
            vec![],
        );
        assert!(InputGeometry::new(&bowtie.into()).is_err());
    }
}
