use std::fmt;
use std::str::FromStr;

use crate::error::GeometryError;
use crate::geometry::{Dimension, Location};

/// A DE-9IM intersection matrix.
///
/// Cell `(a, b)` holds the dimension of the intersection of location `a`
/// of the first geometry with location `b` of the second. Rows and columns
/// are ordered interior, boundary, exterior. Rendered as the usual
/// nine-character row-major code, e.g. `212101212`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntersectionMatrix([[Dimension; 3]; 3]);

impl Default for IntersectionMatrix {
    /// Matrix of two empty geometries: only the exteriors meet.
    fn default() -> Self {
        let mut cells = [[Dimension::Empty; 3]; 3];
        cells[2][2] = Dimension::Area;
        Self(cells)
    }
}

impl IntersectionMatrix {
    #[inline]
    pub fn get(&self, a: Location, b: Location) -> Dimension {
        self.0[a.index()][b.index()]
    }

    /// Raises a cell to at least `dimension`.
    #[inline]
    pub(crate) fn set_at_least(&mut self, a: Location, b: Location, dimension: Dimension) {
        let cell = &mut self.0[a.index()][b.index()];
        if dimension > *cell {
            *cell = dimension;
        }
    }

    /// Tests the matrix against a pattern of nine symbols from `T F * 0 1 2`.
    ///
    /// `T` matches any non-empty dimension, `F` only the empty set and `*`
    /// anything.
    ///
    /// # Errors
    ///
    /// [`GeometryError::InvalidArgument`] if the pattern is malformed.
    ///
    /// # Example
    ///
    /// ```
    /// use planum::relate::IntersectionMatrix;
    ///
    /// let m: IntersectionMatrix = "212101212".parse().unwrap();
    /// assert!(m.matches("T*T***T**").unwrap());
    /// assert!(!m.matches("FF*FF****").unwrap());
    /// ```
    pub fn matches(&self, pattern: &str) -> Result<bool, GeometryError> {
        let symbols = parse_pattern(pattern)?;
        Ok(self
            .0
            .iter()
            .flatten()
            .zip(symbols)
            .all(|(&dim, symbol)| symbol_matches(symbol, dim)))
    }

    fn matches_static(&self, pattern: &str) -> bool {
        self.matches(pattern).unwrap_or(false)
    }

    pub fn is_disjoint(&self) -> bool {
        self.matches_static("FF*FF****")
    }

    pub fn is_intersects(&self) -> bool {
        !self.is_disjoint()
    }

    pub fn is_contains(&self) -> bool {
        self.matches_static("T*****FF*")
    }

    pub fn is_within(&self) -> bool {
        self.matches_static("T*F**F***")
    }

    pub fn is_covers(&self) -> bool {
        ["T*****FF*", "*T****FF*", "***T**FF*", "****T*FF*"]
            .iter()
            .any(|p| self.matches_static(p))
    }

    pub fn is_covered_by(&self) -> bool {
        ["T*F**F***", "*TF**F***", "**FT*F***", "**F*TF***"]
            .iter()
            .any(|p| self.matches_static(p))
    }

    /// The geometries meet only on their boundaries. Two puntal geometries
    /// never touch.
    pub fn is_touches(&self, dim_a: Dimension, dim_b: Dimension) -> bool {
        if dim_a == Dimension::Point && dim_b == Dimension::Point {
            return false;
        }
        ["FT*******", "F**T*****", "F***T****"]
            .iter()
            .any(|p| self.matches_static(p))
    }

    pub fn is_crosses(&self, dim_a: Dimension, dim_b: Dimension) -> bool {
        use Dimension::{Area, Line, Point};
        match (dim_a, dim_b) {
            (Point, Line) | (Point, Area) | (Line, Area) => self.matches_static("T*T******"),
            (Line, Point) | (Area, Point) | (Area, Line) => self.matches_static("T*****T**"),
            (Line, Line) => self.matches_static("0********"),
            _ => false,
        }
    }

    pub fn is_overlaps(&self, dim_a: Dimension, dim_b: Dimension) -> bool {
        use Dimension::{Area, Line, Point};
        match (dim_a, dim_b) {
            (Point, Point) | (Area, Area) => self.matches_static("T*T***T**"),
            (Line, Line) => self.matches_static("1*T***T**"),
            _ => false,
        }
    }

    /// Topological equality: same point sets, regardless of vertex order
    /// or representation.
    pub fn is_equals(&self) -> bool {
        self.matches_static("T*F**FFF*")
    }
}

fn parse_pattern(pattern: &str) -> Result<Vec<char>, GeometryError> {
    let symbols: Vec<char> = pattern.chars().map(|c| c.to_ascii_uppercase()).collect();
    if symbols.len() != 9 {
        return Err(GeometryError::InvalidArgument {
            name: "pattern",
            message: format!("expected 9 symbols, got {}", symbols.len()),
        });
    }
    if let Some(bad) = symbols.iter().find(|c| !"TF*012".contains(**c)) {
        return Err(GeometryError::InvalidArgument {
            name: "pattern",
            message: format!("unexpected symbol `{bad}`"),
        });
    }
    Ok(symbols)
}

fn symbol_matches(symbol: char, dim: Dimension) -> bool {
    match symbol {
        '*' => true,
        'T' => dim != Dimension::Empty,
        other => other == dim.symbol(),
    }
}

impl fmt::Display for IntersectionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for dim in self.0.iter().flatten() {
            write!(f, "{}", dim.symbol())?;
        }
        Ok(())
    }
}

impl FromStr for IntersectionMatrix {
    type Err = GeometryError;

    /// Parses a nine-character code of `F 0 1 2`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols = parse_pattern(s)?;
        let mut cells = [[Dimension::Empty; 3]; 3];
        for (k, symbol) in symbols.into_iter().enumerate() {
            cells[k / 3][k % 3] = match symbol {
                'F' => Dimension::Empty,
                '0' => Dimension::Point,
                '1' => Dimension::Line,
                '2' => Dimension::Area,
                other => {
                    return Err(GeometryError::InvalidArgument {
                        name: "matrix",
                        message: format!("`{other}` is not a dimension"),
                    })
                }
            };
        }
        Ok(Self(cells))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(code: &str) -> IntersectionMatrix {
        code.parse().unwrap()
    }

    #[test]
    fn test_display_round_trip() {
        assert_eq!(m("212101212").to_string(), "212101212");
        assert_eq!(IntersectionMatrix::default().to_string(), "FFFFFFFF2");
    }

    #[test]
    fn test_set_at_least() {
        let mut matrix = IntersectionMatrix::default();
        matrix.set_at_least(Location::Interior, Location::Boundary, Dimension::Line);
        matrix.set_at_least(Location::Interior, Location::Boundary, Dimension::Point);
        assert_eq!(matrix.get(Location::Interior, Location::Boundary), Dimension::Line);
    }

    #[test]
    fn test_pattern_errors() {
        assert!(m("FF2FF1212").matches("FF*").is_err());
        assert!(m("FF2FF1212").matches("FF*FF***X").is_err());
        assert!("FF2FF12T2".parse::<IntersectionMatrix>().is_err());
    }

    #[test]
    fn test_named_predicates() {
        let overlapping = m("212101212");
        assert!(overlapping.is_intersects());
        assert!(overlapping.is_overlaps(Dimension::Area, Dimension::Area));
        assert!(!overlapping.is_contains());

        let disjoint = m("FF2FF1212");
        assert!(disjoint.is_disjoint());
        assert!(!disjoint.is_touches(Dimension::Area, Dimension::Area));

        let touching = m("FF2F11212");
        assert!(touching.is_touches(Dimension::Area, Dimension::Area));

        let contains = m("212FF1FF2");
        assert!(contains.is_contains());
        assert!(contains.is_covers());
        assert!(!contains.is_within());

        let equal = m("2FFF1FFF2");
        assert!(equal.is_equals());
        assert!(equal.is_within() && equal.is_contains());

        let crossing_lines = m("0F1FF0102");
        assert!(crossing_lines.is_crosses(Dimension::Line, Dimension::Line));
    }

    #[test]
    fn test_lowercase_pattern() {
        assert!(m("FF2FF1212").matches("ff*ff****").unwrap());
    }
}
