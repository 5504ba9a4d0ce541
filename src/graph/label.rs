use crate::geometry::Location;

/// What one input contributes to a graph edge.
///
/// `winding` and `line_direction` count the input's segments lying on the
/// edge, `+1` for each running from the edge's `from` node to its `to` node
/// and `-1` for each running the other way. `left` and `right` record
/// whether the input's area covers the faces on either side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct EdgeLabel {
    pub area_edge: bool,
    pub winding: i32,
    pub line: bool,
    pub line_direction: i32,
    pub left: bool,
    pub right: bool,
}

impl EdgeLabel {
    /// The edge separates the input's interior from its exterior.
    ///
    /// Decided by the resolved sides, so ring segments shared by two parts
    /// or lying inside another part are interior, not boundary.
    #[inline]
    pub fn is_area_boundary(&self) -> bool {
        self.area_edge && self.left != self.right
    }

    /// The edge lies in the input's point set.
    #[inline]
    pub fn covers(&self) -> bool {
        self.area_edge || self.line || self.left || self.right
    }

    /// Location of the edge's interior relative to the input.
    pub fn location(&self) -> Location {
        if self.is_area_boundary() {
            Location::Boundary
        } else if (self.left && self.right) || self.line {
            Location::Interior
        } else {
            Location::Exterior
        }
    }
}
