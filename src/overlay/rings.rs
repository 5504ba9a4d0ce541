//! Tracing result edges into rings and rings into polygons.

use std::collections::HashMap;

use crate::algorithm::locate::locate_in_ring;
use crate::bounds::Envelope;
use crate::error::{GeometryError, OverlayFailure};
use crate::geometry::{signed_area, LinearRing, Location, Polygon};
use crate::graph::TopologyGraph;
use crate::primitives::Coord;
use crate::tolerance::{orient2d, Orientation};

/// Builds polygons from the directed result edges.
///
/// `area[e]` is `Some(true)` when edge `e` is traversed `from -> to` with
/// the result on its left, `Some(false)` when traversed `to -> from`.
pub(super) fn build_polygons(
    graph: &TopologyGraph,
    area: &[Option<bool>],
) -> Result<Vec<Polygon>, GeometryError> {
    let tail = |e: usize| match area[e] {
        Some(true) => graph.edges[e].from,
        _ => graph.edges[e].to,
    };
    let head = |e: usize| match area[e] {
        Some(true) => graph.edges[e].to,
        _ => graph.edges[e].from,
    };

    check_balanced(graph, area, &tail)?;

    let mut visited = vec![false; area.len()];
    let mut shells: Vec<Vec<Coord>> = Vec::new();
    let mut holes: Vec<Vec<Coord>> = Vec::new();

    for start in 0..area.len() {
        if area[start].is_none() || visited[start] {
            continue;
        }

        let mut ring = vec![tail(start)];
        let mut current = start;
        loop {
            visited[current] = true;
            let v = head(current);
            ring.push(v);
            let next = next_edge(graph, area, &tail, v, current)?;
            if next == start {
                break;
            }
            if visited[next] {
                return Err(GeometryError::overlay(OverlayFailure::UnclosedRing(
                    graph.nodes[v].coord,
                )));
            }
            current = next;
        }

        for nodes in split_at_repeats(&ring) {
            let coords: Vec<Coord> = nodes.iter().map(|&n| graph.nodes[n].coord).collect();
            let mut open = remove_collinear(coords);
            if open.len() < 3 {
                continue;
            }
            open.push(open[0]);
            let signed = signed_area(&open);
            if signed > 0.0 {
                shells.push(open);
            } else if signed < 0.0 {
                holes.push(open);
            }
        }
    }

    let polygons = assign_holes(shells, holes)?;
    log::trace!("traced {} result polygons", polygons.len());
    Ok(polygons)
}

fn check_balanced(
    graph: &TopologyGraph,
    area: &[Option<bool>],
    tail: &impl Fn(usize) -> usize,
) -> Result<(), GeometryError> {
    let mut balance = vec![0i64; graph.nodes.len()];
    for e in (0..area.len()).filter(|&e| area[e].is_some()) {
        let t = tail(e);
        let h = graph.edges[e].other(t);
        balance[t] += 1;
        balance[h] -= 1;
    }
    match balance.iter().position(|&b| b != 0) {
        Some(n) => Err(GeometryError::overlay(OverlayFailure::UnbalancedNode(
            graph.nodes[n].coord,
        ))),
        None => Ok(()),
    }
}

/// The first outgoing result edge clockwise from `incoming`, around `v`.
///
/// Turning as far right as possible keeps rings minimal: two result areas
/// meeting at a single node are traced as separate rings.
fn next_edge(
    graph: &TopologyGraph,
    area: &[Option<bool>],
    tail: &impl Fn(usize) -> usize,
    v: usize,
    incoming: usize,
) -> Result<usize, GeometryError> {
    let star = &graph.nodes[v].star;
    let unclosed = || GeometryError::overlay(OverlayFailure::UnclosedRing(graph.nodes[v].coord));
    let pos = star.iter().position(|&e| e == incoming).ok_or_else(unclosed)?;
    let len = star.len();
    (1..len)
        .map(|k| star[(pos + len - k) % len])
        .find(|&e| area[e].is_some() && tail(e) == v)
        .ok_or_else(unclosed)
}

/// Splits a closed node sequence into loops with no repeated node.
fn split_at_repeats(ring: &[usize]) -> Vec<Vec<usize>> {
    let mut loops = Vec::new();
    let mut path: Vec<usize> = Vec::with_capacity(ring.len());
    let mut position: HashMap<usize, usize> = HashMap::new();

    for &n in &ring[..ring.len() - 1] {
        if let Some(&p) = position.get(&n) {
            let tail: Vec<usize> = path.drain(p + 1..).collect();
            for m in &tail {
                position.remove(m);
            }
            let mut closed = Vec::with_capacity(tail.len() + 1);
            closed.push(n);
            closed.extend(tail);
            loops.push(closed);
        } else {
            position.insert(n, path.len());
            path.push(n);
        }
    }
    loops.push(path);
    loops
}

/// Removes vertices lying exactly on the line through their neighbours.
/// Takes and returns an open ring.
fn remove_collinear(mut pts: Vec<Coord>) -> Vec<Coord> {
    let mut i = 0;
    let mut unchanged = 0;
    while pts.len() >= 3 && unchanged < pts.len() {
        let n = pts.len();
        let at = i % n;
        let prev = pts[(at + n - 1) % n];
        let next = pts[(at + 1) % n];
        if orient2d(prev, pts[at], next) == Orientation::Collinear {
            pts.remove(at);
            unchanged = 0;
            i = at.saturating_sub(1);
        } else {
            i = at + 1;
            unchanged += 1;
        }
    }
    pts
}

/// Attaches every hole to the smallest shell containing it.
fn assign_holes(shells: Vec<Vec<Coord>>, holes: Vec<Vec<Coord>>) -> Result<Vec<Polygon>, GeometryError> {
    let mut order: Vec<usize> = (0..shells.len()).collect();
    let areas: Vec<f64> = shells.iter().map(|s| signed_area(s)).collect();
    order.sort_by(|&a, &b| areas[a].total_cmp(&areas[b]));
    let envelopes: Vec<Option<Envelope>> = shells
        .iter()
        .map(|s| Envelope::from_coords(s.iter().copied()))
        .collect();

    let mut assigned: Vec<Vec<LinearRing>> = vec![Vec::new(); shells.len()];
    for hole in holes {
        let probe = hole_probe(&hole);
        let owner = order.iter().copied().find(|&s| {
            envelopes[s].map_or(false, |env| env.contains(probe))
                && contains_hole(&shells[s], &hole)
        });
        match owner {
            Some(s) => assigned[s].push(LinearRing::from_coords_unchecked(hole)),
            None => {
                return Err(GeometryError::overlay(OverlayFailure::HoleWithoutShell(probe)));
            }
        }
    }

    Ok(shells
        .into_iter()
        .zip(assigned)
        .map(|(shell, holes)| Polygon::new(LinearRing::from_coords_unchecked(shell), holes))
        .collect())
}

fn hole_probe(hole: &[Coord]) -> Coord {
    hole[0].midpoint(hole[1])
}

/// A hole lies inside a shell when its first vertex off the shell boundary
/// is interior. Holes may touch their shell at single points only.
fn contains_hole(shell: &[Coord], hole: &[Coord]) -> bool {
    let candidates = hole
        .iter()
        .copied()
        .chain(hole.windows(2).map(|w| w[0].midpoint(w[1])));
    for c in candidates {
        match locate_in_ring(shell, c, 0.0) {
            Location::Interior => return true,
            Location::Exterior => return false,
            Location::Boundary => {}
        }
    }
    false
}
