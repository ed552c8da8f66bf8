// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::algorithms::euler::join_vertices;
use crate::graph::{Digraph, Graph};
use crate::traits::Algorithm;

/// Strongly connected components via Kosaraju's algorithm.
///
/// The unit works on a [`Digraph`]. Through the undirected `run` entry point
/// every edge becomes a pair of opposite arcs, which makes the components the
/// connected components of the graph.
pub struct SccAlgorithm;

impl SccAlgorithm {
    pub fn new() -> Self {
        Self
    }

    pub fn run_directed(&self, digraph: &Digraph) -> String {
        let components = Self::components(digraph);
        let mut output = format!("OK {} COMPONENTS\n", components.len());
        for (index, component) in components.iter().enumerate() {
            output.push_str(&format!("COMP {}: {}\n", index, join_vertices(component)));
        }
        output
    }

    /// Components in discovery order of the second pass; members ascending.
    pub fn components(digraph: &Digraph) -> Vec<Vec<usize>> {
        let finish_order = finish_order(digraph);
        let transpose = digraph.transpose();

        let mut visited = vec![false; digraph.vertex_count()];
        let mut components = Vec::new();
        for &root in finish_order.iter().rev() {
            if visited[root] {
                continue;
            }
            let mut component = Vec::new();
            let mut stack = vec![root];
            visited[root] = true;
            while let Some(vertex) = stack.pop() {
                component.push(vertex);
                for &next in transpose.adj(vertex) {
                    if !visited[next] {
                        visited[next] = true;
                        stack.push(next);
                    }
                }
            }
            component.sort_unstable();
            components.push(component);
        }
        components
    }
}

impl Algorithm for SccAlgorithm {
    fn run(&self, graph: &Graph) -> String {
        self.run_directed(&Digraph::from(graph))
    }

    fn name(&self) -> &'static str {
        "SCC"
    }
}

/// Vertices in order of DFS completion, iterative to keep deep graphs off
/// the call stack.
fn finish_order(digraph: &Digraph) -> Vec<usize> {
    let vertex_count = digraph.vertex_count();
    let mut visited = vec![false; vertex_count];
    let mut order = Vec::with_capacity(vertex_count);

    for start in 0..vertex_count {
        if visited[start] {
            continue;
        }
        visited[start] = true;
        // (vertex, index of the next successor to inspect)
        let mut stack = vec![(start, 0usize)];
        while let Some(frame) = stack.last_mut() {
            let (vertex, cursor) = *frame;
            match digraph.adj(vertex).get(cursor) {
                Some(&next) => {
                    frame.1 += 1;
                    if !visited[next] {
                        visited[next] = true;
                        stack.push((next, 0));
                    }
                }
                None => {
                    order.push(vertex);
                    stack.pop();
                }
            }
        }
    }
    order
}
