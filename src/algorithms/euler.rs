// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::graph::Graph;
use crate::traits::Algorithm;

/// Eulerian circuit via Hierholzer's algorithm.
///
/// Output: `OK <v0> <v1> ... <v0>` or `ERR NO_EULERIAN_CYCLE`.
pub struct EulerAlgorithm;

impl EulerAlgorithm {
    pub fn new() -> Self {
        Self
    }

    /// Connected (ignoring isolated vertices) and every degree even.
    pub fn has_eulerian_cycle(graph: &Graph) -> bool {
        if !is_connected_ignoring_isolated(graph) {
            return false;
        }
        (0..graph.vertex_count()).all(|vertex| degree(graph, vertex) % 2 == 0)
    }

    /// The circuit as a closed vertex walk, or `None` when none exists.
    ///
    /// A graph without edges yields the single-vertex circuit `[0]`.
    pub fn eulerian_cycle(graph: &Graph) -> Option<Vec<usize>> {
        if !Self::has_eulerian_cycle(graph) {
            return None;
        }

        let Some(start) = (0..graph.vertex_count()).find(|&v| !graph.adjacent(v).is_empty()) else {
            return Some(vec![0]);
        };

        // One id per undirected edge, listed under both endpoints, so each
        // edge is consumed exactly once. Parallel edges get distinct ids.
        let mut incident: Vec<Vec<(usize, usize)>> = vec![Vec::new(); graph.vertex_count()];
        let mut edge_total = 0;
        for from in 0..graph.vertex_count() {
            for edge in graph.adjacent(from) {
                if from <= edge.dest {
                    incident[from].push((edge.dest, edge_total));
                    incident[edge.dest].push((from, edge_total));
                    edge_total += 1;
                }
            }
        }

        let mut used = vec![false; edge_total];
        let mut circuit = Vec::with_capacity(edge_total + 1);
        let mut stack = vec![start];

        while let Some(&vertex) = stack.last() {
            let remaining = &mut incident[vertex];
            while remaining.last().is_some_and(|&(_, id)| used[id]) {
                remaining.pop();
            }

            match remaining.pop() {
                Some((next, id)) => {
                    used[id] = true;
                    stack.push(next);
                }
                None => {
                    // Dead end: the sub-circuit closes here and is spliced in
                    // as the stack unwinds.
                    circuit.push(vertex);
                    stack.pop();
                }
            }
        }

        circuit.reverse();
        Some(circuit)
    }
}

impl Algorithm for EulerAlgorithm {
    fn run(&self, graph: &Graph) -> String {
        match Self::eulerian_cycle(graph) {
            Some(circuit) => format!("OK {}\n", join_vertices(&circuit)),
            None => "ERR NO_EULERIAN_CYCLE\n".to_string(),
        }
    }

    fn name(&self) -> &'static str {
        "EULER"
    }
}

fn degree(graph: &Graph, vertex: usize) -> usize {
    graph
        .adjacent(vertex)
        .iter()
        .map(|edge| if edge.dest == vertex { 2 } else { 1 })
        .sum()
}

fn is_connected_ignoring_isolated(graph: &Graph) -> bool {
    let vertex_count = graph.vertex_count();
    let Some(start) = (0..vertex_count).find(|&v| !graph.adjacent(v).is_empty()) else {
        return true;
    };

    let mut visited = vec![false; vertex_count];
    let mut stack = vec![start];
    visited[start] = true;
    while let Some(vertex) = stack.pop() {
        for edge in graph.adjacent(vertex) {
            if !visited[edge.dest] {
                visited[edge.dest] = true;
                stack.push(edge.dest);
            }
        }
    }

    (0..vertex_count).all(|v| visited[v] || graph.adjacent(v).is_empty())
}

pub(crate) fn join_vertices(vertices: &[usize]) -> String {
    vertices
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
