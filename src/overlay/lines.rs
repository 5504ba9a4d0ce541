//! Merging result line edges into line strings.

use crate::geometry::LineString;
use crate::graph::TopologyGraph;

/// Chains the selected edges into maximal line strings.
///
/// Chains run through nodes where exactly two selected edges meet and stop
/// everywhere else. Each chain is oriented to agree with the majority of
/// the input line segments lying on it.
pub(super) fn build_lines(graph: &TopologyGraph, selected: &[bool]) -> Vec<LineString> {
    let mut degree = vec![0usize; graph.nodes.len()];
    for (e, edge) in graph.edges.iter().enumerate() {
        if selected[e] {
            degree[edge.from] += 1;
            degree[edge.to] += 1;
        }
    }

    let mut visited = vec![false; selected.len()];
    let mut lines = Vec::new();

    // Open chains start at nodes that are not pass-through.
    for n in 0..graph.nodes.len() {
        if degree[n] == 0 || degree[n] == 2 {
            continue;
        }
        for &e in &graph.nodes[n].star {
            if selected[e] && !visited[e] {
                lines.push(walk(graph, selected, &degree, &mut visited, n, e));
            }
        }
    }

    // Whatever remains forms closed loops.
    for e in 0..selected.len() {
        if selected[e] && !visited[e] {
            let start = graph.edges[e].from;
            lines.push(walk(graph, selected, &degree, &mut visited, start, e));
        }
    }

    lines
}

fn walk(
    graph: &TopologyGraph,
    selected: &[bool],
    degree: &[usize],
    visited: &mut [bool],
    start: usize,
    first: usize,
) -> LineString {
    let mut nodes = vec![start];
    let mut agreement = 0i32;
    let mut at = start;
    let mut edge = first;

    loop {
        visited[edge] = true;
        let e = &graph.edges[edge];
        let sign = if e.from == at { 1 } else { -1 };
        agreement += sign * e.labels.iter().map(|l| l.line_direction).sum::<i32>();

        at = e.other(at);
        nodes.push(at);
        if degree[at] != 2 || at == start {
            break;
        }
        match graph.nodes[at]
            .star
            .iter()
            .copied()
            .find(|&next| selected[next] && !visited[next])
        {
            Some(next) => edge = next,
            None => break,
        }
    }

    if agreement < 0 {
        nodes.reverse();
    }
    LineString::from_coords_unchecked(nodes.into_iter().map(|n| graph.nodes[n].coord).collect())
}
