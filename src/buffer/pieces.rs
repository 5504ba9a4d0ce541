//! Elementary buffer pieces.
//!
//! The buffer of a linework is the union of a rectangle around every
//! segment, a wedge filling the gap at every corner, and a cap at every open
//! end. Each piece is a small valid polygon; the overlay engine merges them.

use std::f64::consts::{FRAC_PI_2, TAU};

use super::{BufferParams, CapStyle, JoinStyle};
use crate::geometry::{LinearRing, Polygon};
use crate::primitives::{Coord, Vec2};
use crate::tolerance::{orient2d, Orientation};

/// Collects pieces for a buffer distance `width > 0`.
pub(super) struct Pieces<'a> {
    width: f64,
    params: &'a BufferParams,
    pub polygons: Vec<Polygon>,
}

impl<'a> Pieces<'a> {
    pub fn new(width: f64, params: &'a BufferParams) -> Self {
        Self {
            width,
            params,
            polygons: Vec::new(),
        }
    }

    /// Pieces around a closed ring: no caps, a join at every vertex.
    pub fn add_ring(&mut self, ring: &[Coord]) {
        let open = &ring[..ring.len() - 1];
        let n = open.len();
        for i in 0..n {
            let (prev, v, next) = (open[(i + n - 1) % n], open[i], open[(i + 1) % n]);
            self.add_segment(v, next);
            self.add_join(prev, v, next);
        }
    }

    /// Pieces around an open or closed line string.
    pub fn add_line(&mut self, line: &[Coord]) {
        if line.len() >= 4 && line[0] == line[line.len() - 1] {
            self.add_ring(line);
            return;
        }
        for w in line.windows(2) {
            self.add_segment(w[0], w[1]);
        }
        for w in line.windows(3) {
            self.add_join(w[0], w[1], w[2]);
        }
        let n = line.len();
        self.add_cap(line[1], line[0]);
        self.add_cap(line[n - 2], line[n - 1]);
    }

    /// The buffer of a single point.
    pub fn add_point(&mut self, p: Coord) {
        let w = self.width;
        match self.params.cap_style {
            CapStyle::Round => {
                let n = 4 * self.params.curve_segments();
                let ring = (0..n)
                    .map(|k| {
                        let angle = TAU * k as f64 / n as f64;
                        p + Vec2::from_angle(angle) * w
                    })
                    .collect();
                self.push(ring);
            }
            CapStyle::Square => {
                self.polygons.push(Polygon::rectangle(
                    Coord::new(p.x - w, p.y - w),
                    Coord::new(p.x + w, p.y + w),
                ));
            }
            CapStyle::Flat => {}
        }
    }

    /// Rectangle extending `width` to both sides of `p -> q`.
    fn add_segment(&mut self, p: Coord, q: Coord) {
        let Some(n) = (q - p).perp_left().normalize() else {
            return;
        };
        let off = n * self.width;
        self.push(vec![p - off, q - off, q + off, p + off]);
    }

    /// Fills the gap on the outside of the turn `prev -> v -> next`.
    fn add_join(&mut self, prev: Coord, v: Coord, next: Coord) {
        let (Some(d1), Some(d2)) = ((v - prev).normalize(), (next - v).normalize()) else {
            return;
        };
        let turn = orient2d(prev, v, next);
        let (n1, n2) = match turn {
            Orientation::CounterClockwise => (d1.perp_right(), d2.perp_right()),
            Orientation::Clockwise => (d1.perp_left(), d2.perp_left()),
            Orientation::Collinear => {
                // A reversal leaves the end of the first segment uncovered.
                if d1.dot(d2) < 0.0 && self.params.join_style == JoinStyle::Round {
                    self.add_round_cap(v, d1);
                }
                return;
            }
        };

        let w = self.width;
        let (a, b) = (v + n1 * w, v + n2 * w);
        match self.params.join_style {
            JoinStyle::Round if self.params.quadrant_segments > 0 => {
                let mut ring = vec![v, a];
                ring.extend(arc(v, w, n1, n2, self.params.quadrant_segments));
                ring.push(b);
                self.push(ring);
            }
            JoinStyle::Mitre => {
                let sum = n1 + n2;
                let denom = sum.magnitude_squared();
                let mitre = v + sum * (2.0 * w / denom);
                if denom > 0.0 && mitre.distance(v) <= self.params.mitre_limit * w {
                    self.push(vec![v, a, mitre, b]);
                } else {
                    self.push(vec![v, a, b]);
                }
            }
            _ => self.push(vec![v, a, b]),
        }
    }

    /// End cap at `end`, for a line arriving from `from`.
    fn add_cap(&mut self, from: Coord, end: Coord) {
        let Some(dir) = (end - from).normalize() else {
            return;
        };
        match self.params.cap_style {
            CapStyle::Round => self.add_round_cap(end, dir),
            CapStyle::Square => self.add_segment(end, end + dir * self.width),
            CapStyle::Flat => {}
        }
    }

    /// Half disc beyond `end` in direction `dir`.
    fn add_round_cap(&mut self, end: Coord, dir: Vec2<f64>) {
        let w = self.width;
        let left = dir.perp_left();
        let right = dir.perp_right();
        let mut ring = vec![end + left * w];
        ring.extend(arc(end, w, left, dir, self.params.curve_segments()));
        ring.push(end + dir * w);
        ring.extend(arc(end, w, dir, right, self.params.curve_segments()));
        ring.push(end + right * w);
        self.push(ring);
    }

    /// Adds an open vertex list as a polygon, skipping slivers.
    fn push(&mut self, mut vertices: Vec<Coord>) {
        vertices.dedup();
        if vertices.len() < 3 {
            return;
        }
        vertices.push(vertices[0]);
        let ring = LinearRing::from_coords_unchecked(vertices);
        if ring.signed_area().abs() > self.width * self.width * 1e-12 {
            self.polygons.push(Polygon::new(ring, Vec::new()));
        }
    }
}

/// Interior points of the shorter circular arc from `center + from * r` to
/// `center + to * r`, with `quadrant_segments` segments per quarter turn.
fn arc(center: Coord, r: f64, from: Vec2<f64>, to: Vec2<f64>, quadrant_segments: usize) -> Vec<Coord> {
    let sweep = from.cross(to).atan2(from.dot(to));
    let steps = ((sweep.abs() / FRAC_PI_2) * quadrant_segments as f64).ceil().max(1.0) as usize;
    let start = from.angle();
    (1..steps)
        .map(|k| {
            let angle = start + sweep * k as f64 / steps as f64;
            center + Vec2::from_angle(angle) * r
        })
        .collect()
}
