/// Shape of the ends of buffered lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CapStyle {
    /// Half circle around the endpoint.
    #[default]
    Round,
    /// Cut off square at the endpoint.
    Flat,
    /// Square extending past the endpoint by the buffer distance.
    Square,
}

/// Shape of the corners where two offset segments meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JoinStyle {
    /// Circular arc around the vertex.
    #[default]
    Round,
    /// Offset edges extended until they meet, limited by the mitre limit.
    Mitre,
    /// Straight line between the offset edge ends.
    Bevel,
}

/// Options for [`buffer_with_params`](super::buffer_with_params).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BufferParams {
    /// Segments used to approximate a quarter circle. Zero turns round
    /// joins into bevels; caps and point buffers use at least one.
    pub quadrant_segments: usize,
    pub cap_style: CapStyle,
    pub join_style: JoinStyle,
    /// Largest mitre length, as a multiple of the buffer distance, before a
    /// mitre join falls back to a bevel.
    pub mitre_limit: f64,
}

impl Default for BufferParams {
    fn default() -> Self {
        Self {
            quadrant_segments: 8,
            cap_style: CapStyle::Round,
            join_style: JoinStyle::Round,
            mitre_limit: 5.0,
        }
    }
}

impl BufferParams {
    /// Sets the number of segments per quarter circle.
    pub fn with_quadrant_segments(mut self, segments: usize) -> Self {
        self.quadrant_segments = segments;
        self
    }

    /// Sets the line end style.
    pub fn with_cap_style(mut self, cap: CapStyle) -> Self {
        self.cap_style = cap;
        self
    }

    /// Sets the corner style.
    pub fn with_join_style(mut self, join: JoinStyle) -> Self {
        self.join_style = join;
        self
    }

    /// Sets the mitre limit.
    pub fn with_mitre_limit(mut self, limit: f64) -> Self {
        self.mitre_limit = limit;
        self
    }

    /// Segments per quarter circle for shapes that must stay curved.
    #[inline]
    pub(crate) fn curve_segments(&self) -> usize {
        self.quadrant_segments.max(1)
    }
}
