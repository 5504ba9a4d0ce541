//! Topology graph shared by overlay and relate.
//!
//! The operands are noded together into a planar arrangement. Every distinct
//! vertex becomes a node and every distinct segment an undirected edge, with
//! one [`EdgeLabel`] per operand recording how that operand's rings, lines
//! and area relate to the edge. Each node keeps its incident edges sorted
//! counter-clockwise, starting from the positive x axis.

mod input;
mod label;

pub(crate) use input::InputGeometry;
pub(crate) use label::EdgeLabel;

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::bounds::Envelope;
use crate::error::GeometryError;
use crate::geometry::Location;
use crate::noding::{self, coord_key, PointRole, SegmentKind, SourcePoint, SourceSegment};
use crate::primitives::{Coord, Segment2};
use crate::tolerance::{orient2d, snap_tolerance, Orientation};

/// A graph vertex.
#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub coord: Coord,
    /// Incident edges, counter-clockwise.
    pub star: Vec<usize>,
    /// Per input: an input point sits here.
    pub point: Vec<bool>,
    /// Per input: number of line ends at this node.
    pub line_ends: Vec<u32>,
}

/// An undirected edge between two distinct nodes, `from < to`.
#[derive(Debug, Clone)]
pub(crate) struct Edge {
    pub from: usize,
    pub to: usize,
    pub labels: Vec<EdgeLabel>,
}

#[derive(Debug)]
pub(crate) struct TopologyGraph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    pub inputs: Vec<InputGeometry>,
    pub tolerance: f64,
}

impl TopologyGraph {
    /// Nodes the inputs together and labels every edge and face side.
    pub fn build(inputs: Vec<InputGeometry>) -> Result<Self, GeometryError> {
        let extent = inputs
            .iter()
            .filter_map(InputGeometry::envelope)
            .reduce(Envelope::union);
        let tolerance = snap_tolerance(extent);

        let (segments, points) = collect_sources(&inputs);
        let arrangement = noding::node(segments, points, tolerance)?;

        let mut builder = Builder::new(inputs.len());
        for source in &arrangement.segments {
            builder.add_segment(source);
        }
        for point in &arrangement.points {
            let n = builder.node_id(point.coord);
            match point.role {
                PointRole::Point => builder.nodes[n].point[point.input] = true,
                PointRole::LineEnd => builder.nodes[n].line_ends[point.input] += 1,
            }
        }

        let Builder {
            mut nodes,
            mut edges,
            ..
        } = builder;

        for edge_id in 0..edges.len() {
            let (from, to) = (edges[edge_id].from, edges[edge_id].to);
            nodes[from].star.push(edge_id);
            nodes[to].star.push(edge_id);
        }
        for n in 0..nodes.len() {
            let origin = nodes[n].coord;
            let mut star = std::mem::take(&mut nodes[n].star);
            star.sort_by(|&a, &b| {
                let pa = nodes[edges[a].other(n)].coord;
                let pb = nodes[edges[b].other(n)].coord;
                compare_angle(origin, pa, pb)
            });
            nodes[n].star = star;
        }

        for (i, input) in inputs.iter().enumerate() {
            resolve_sides(&nodes, &mut edges, input, i, tolerance);
        }

        log::debug!(
            "topology graph: {} inputs, {} nodes, {} edges",
            inputs.len(),
            nodes.len(),
            edges.len()
        );

        Ok(Self {
            nodes,
            edges,
            inputs,
            tolerance,
        })
    }

    /// Location of a node relative to input `i`, read from the labels of
    /// its incident edges.
    pub fn node_location(&self, n: usize, i: usize) -> Location {
        let node = &self.nodes[n];
        let mut in_area = false;
        let mut on_line = false;
        for &e in &node.star {
            let label = &self.edges[e].labels[i];
            if label.is_area_boundary() {
                return Location::Boundary;
            }
            in_area |= label.left || label.right;
            on_line |= label.line;
        }

        if in_area || self.isolated_in_area(n, i) {
            Location::Interior
        } else if node.line_ends[i] % 2 == 1 {
            Location::Boundary
        } else if on_line || node.point[i] {
            Location::Interior
        } else {
            Location::Exterior
        }
    }

    /// The node lies inside (not on the boundary of) input `i`'s area.
    pub fn node_in_area(&self, n: usize, i: usize) -> bool {
        let node = &self.nodes[n];
        let covered = node.star.iter().any(|&e| {
            let label = &self.edges[e].labels[i];
            label.left || label.right
        });
        let on_boundary = node
            .star
            .iter()
            .any(|&e| self.edges[e].labels[i].is_area_boundary());
        (covered && !on_boundary) || self.isolated_in_area(n, i)
    }

    fn isolated_in_area(&self, n: usize, i: usize) -> bool {
        let node = &self.nodes[n];
        node.star.is_empty()
            && self.inputs[i].area_location(node.coord, self.tolerance) == Location::Interior
    }
}

impl Edge {
    #[inline]
    pub fn other(&self, n: usize) -> usize {
        if self.from == n {
            self.to
        } else {
            self.from
        }
    }
}

/// Counter-clockwise angular order of `a` and `b` around `origin`, starting
/// from the positive x axis. Exact for every finite input.
pub(crate) fn compare_angle(origin: Coord, a: Coord, b: Coord) -> Ordering {
    let qa = (a - origin).quadrant();
    let qb = (b - origin).quadrant();
    qa.cmp(&qb).then_with(|| match orient2d(origin, a, b) {
        Orientation::CounterClockwise => Ordering::Less,
        Orientation::Clockwise => Ordering::Greater,
        Orientation::Collinear => Ordering::Equal,
    })
}

fn collect_sources(inputs: &[InputGeometry]) -> (Vec<SourceSegment>, Vec<SourcePoint>) {
    let mut segments = Vec::new();
    let mut points = Vec::new();

    for (i, input) in inputs.iter().enumerate() {
        for polygon in &input.polygons {
            for ring in polygon.rings() {
                segments.extend(ring.segments().map(|seg| SourceSegment {
                    seg,
                    input: i,
                    kind: SegmentKind::Area,
                }));
            }
        }
        for line in &input.lines {
            segments.extend(line.windows(2).map(|w| SourceSegment {
                seg: Segment2::new(w[0], w[1]),
                input: i,
                kind: SegmentKind::Line,
            }));
            for end in [line[0], line[line.len() - 1]] {
                points.push(SourcePoint {
                    coord: end,
                    input: i,
                    role: PointRole::LineEnd,
                });
            }
        }
        points.extend(input.points.iter().map(|&coord| SourcePoint {
            coord,
            input: i,
            role: PointRole::Point,
        }));
    }
    (segments, points)
}

struct Builder {
    inputs: usize,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    node_index: HashMap<(u64, u64), usize>,
    edge_index: HashMap<(usize, usize), usize>,
}

impl Builder {
    fn new(inputs: usize) -> Self {
        Self {
            inputs,
            nodes: Vec::new(),
            edges: Vec::new(),
            node_index: HashMap::new(),
            edge_index: HashMap::new(),
        }
    }

    fn node_id(&mut self, coord: Coord) -> usize {
        if let Some(&id) = self.node_index.get(&coord_key(coord)) {
            return id;
        }
        let id = self.nodes.len();
        self.nodes.push(Node {
            coord,
            star: Vec::new(),
            point: vec![false; self.inputs],
            line_ends: vec![0; self.inputs],
        });
        self.node_index.insert(coord_key(coord), id);
        id
    }

    fn add_segment(&mut self, source: &SourceSegment) {
        let a = self.node_id(source.seg.start);
        let b = self.node_id(source.seg.end);
        let (from, to) = (a.min(b), a.max(b));
        let direction = if a == from { 1 } else { -1 };

        let inputs = self.inputs;
        let edges = &mut self.edges;
        let id = *self.edge_index.entry((from, to)).or_insert_with(|| {
            edges.push(Edge {
                from,
                to,
                labels: vec![EdgeLabel::default(); inputs],
            });
            edges.len() - 1
        });

        let label = &mut self.edges[id].labels[source.input];
        match source.kind {
            SegmentKind::Area => {
                label.area_edge = true;
                label.winding += direction;
            }
            SegmentKind::Line => {
                label.line = true;
                label.line_direction += direction;
            }
        }
    }
}

/// Sets the `left`/`right` flags of input `i` on every edge.
///
/// Ring edges take their sides from the winding count. Every other edge has
/// the same location on both sides; it is computed by a point-in-area test
/// at one edge midpoint and then spread to all edges reachable through
/// nodes that do not touch the input's boundary.
fn resolve_sides(
    nodes: &[Node],
    edges: &mut [Edge],
    input: &InputGeometry,
    i: usize,
    tolerance: f64,
) {
    if input.polygons.is_empty() {
        return;
    }
    let overlapping_parts = input.polygons.len() > 1;
    let midpoint = |e: &Edge| nodes[e.from].coord.midpoint(nodes[e.to].coord);

    let mut resolved = vec![false; edges.len()];
    for (e, edge) in edges.iter_mut().enumerate() {
        let label = edge.labels[i];
        if !label.area_edge {
            continue;
        }
        let (left, right) = if label.winding == 0
            || (overlapping_parts
                && input.area_location(midpoint(edge), tolerance) == Location::Interior)
        {
            (true, true)
        } else {
            (label.winding > 0, label.winding < 0)
        };
        edge.labels[i].left = left;
        edge.labels[i].right = right;
        resolved[e] = true;
    }

    let touches_boundary: Vec<bool> = nodes
        .iter()
        .map(|n| n.star.iter().any(|&e| edges[e].labels[i].area_edge))
        .collect();

    let mut stack = Vec::new();
    for seed in 0..edges.len() {
        if resolved[seed] {
            continue;
        }
        let inside = input.area_location(midpoint(&edges[seed]), tolerance) == Location::Interior;
        resolved[seed] = true;
        stack.push(seed);
        while let Some(e) = stack.pop() {
            edges[e].labels[i].left = inside;
            edges[e].labels[i].right = inside;
            for n in [edges[e].from, edges[e].to] {
                if touches_boundary[n] {
                    continue;
                }
                for &next in &nodes[n].star {
                    if !resolved[next] {
                        resolved[next] = true;
                        stack.push(next);
                    }
                }
            }
        }
    }
}
