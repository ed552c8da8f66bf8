// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt::{Display, Formatter};

use crate::errors::GraphError;

/// Weight given to edges added without an explicit weight.
pub const DEFAULT_WEIGHT: i64 = 1;

/// One adjacency entry: the far endpoint and the edge weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub dest: usize,
    pub weight: i64,
}

/// Undirected graph stored as adjacency lists.
///
/// Adding an edge `(u, v, w)` with `u != v` stores `(v, w)` under `u` and the
/// mirror `(u, w)` under `v`; a self-loop is stored once. Parallel edges are
/// kept as distinct entries.
///
/// # Example
/// ```
/// use the_graphmill::graph::Graph;
///
/// let mut graph = Graph::new(3).unwrap();
/// graph.add_weighted_edge(0, 1, 4).unwrap();
/// graph.add_edge(1, 2).unwrap();
///
/// assert_eq!(graph.edge_count(), 2);
/// assert!(graph.has_edge(2, 1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    adjacency: Vec<Vec<Edge>>,
}

impl Graph {
    /// Creates a graph with `vertex_count` isolated vertices.
    pub fn new(vertex_count: usize) -> Result<Self, GraphError> {
        if vertex_count == 0 {
            return Err(GraphError::InvalidVertexCount(vertex_count));
        }
        Ok(Self {
            adjacency: vec![Vec::new(); vertex_count],
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Adds an unweighted edge (weight [`DEFAULT_WEIGHT`]).
    pub fn add_edge(&mut self, from: usize, to: usize) -> Result<(), GraphError> {
        self.add_weighted_edge(from, to, DEFAULT_WEIGHT)
    }

    pub fn add_weighted_edge(
        &mut self,
        from: usize,
        to: usize,
        weight: i64,
    ) -> Result<(), GraphError> {
        self.validate_vertex(from)?;
        self.validate_vertex(to)?;

        self.adjacency[from].push(Edge { dest: to, weight });
        if from != to {
            self.adjacency[to].push(Edge { dest: from, weight });
        }
        Ok(())
    }

    /// Removes one edge between `from` and `to`, both directions at once.
    ///
    /// With parallel edges only the first matching pair goes away.
    pub fn remove_edge(&mut self, from: usize, to: usize) -> Result<(), GraphError> {
        self.validate_vertex(from)?;
        self.validate_vertex(to)?;

        let position = self.adjacency[from]
            .iter()
            .position(|edge| edge.dest == to)
            .ok_or(GraphError::EdgeNotFound { from, to })?;
        let removed = self.adjacency[from].remove(position);

        if from != to {
            // The mirror carries the same weight; prefer the exact match so
            // parallel edges with different weights stay paired.
            let mirror = &mut self.adjacency[to];
            let position = mirror
                .iter()
                .position(|edge| edge.dest == from && edge.weight == removed.weight)
                .or_else(|| mirror.iter().position(|edge| edge.dest == from));
            if let Some(position) = position {
                mirror.remove(position);
            }
        }
        Ok(())
    }

    pub fn neighbors(&self, vertex: usize) -> Result<&[Edge], GraphError> {
        self.validate_vertex(vertex)?;
        Ok(&self.adjacency[vertex])
    }

    /// Degree of `vertex`; a self-loop contributes 2.
    pub fn degree(&self, vertex: usize) -> Result<usize, GraphError> {
        let edges = self.neighbors(vertex)?;
        Ok(edges
            .iter()
            .map(|edge| if edge.dest == vertex { 2 } else { 1 })
            .sum())
    }

    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        self.adjacency
            .get(from)
            .map(|edges| edges.iter().any(|edge| edge.dest == to))
            .unwrap_or(false)
    }

    /// Lists every undirected edge once as `(u, v, weight)` with `u <= v`.
    pub fn edges(&self) -> Vec<(usize, usize, i64)> {
        let mut edges = Vec::new();
        for (from, adjacent) in self.adjacency.iter().enumerate() {
            for edge in adjacent {
                if from < edge.dest {
                    edges.push((from, edge.dest, edge.weight));
                } else if from == edge.dest {
                    edges.push((from, from, edge.weight));
                }
            }
        }
        edges
    }

    pub fn edge_count(&self) -> usize {
        self.edges().len()
    }

    /// Raw adjacency entries of `vertex`. Callers inside the crate have
    /// already bounded the index by `vertex_count`.
    pub(crate) fn adjacent(&self, vertex: usize) -> &[Edge] {
        &self.adjacency[vertex]
    }

    /// Distinct neighbours of every vertex in ascending order, self-loops
    /// dropped. Memory is proportional to the edge count, so membership is
    /// a binary search rather than a matrix lookup.
    pub(crate) fn neighbor_sets(&self) -> Vec<Vec<usize>> {
        self.adjacency
            .iter()
            .enumerate()
            .map(|(vertex, edges)| {
                let mut set: Vec<usize> = edges
                    .iter()
                    .map(|edge| edge.dest)
                    .filter(|&dest| dest != vertex)
                    .collect();
                set.sort_unstable();
                set.dedup();
                set
            })
            .collect()
    }

    fn validate_vertex(&self, vertex: usize) -> Result<(), GraphError> {
        if vertex >= self.vertex_count() {
            return Err(GraphError::VertexOutOfRange {
                vertex,
                vertex_count: self.vertex_count(),
            });
        }
        Ok(())
    }
}

impl Display for Graph {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        for (vertex, edges) in self.adjacency.iter().enumerate() {
            write!(f, "{}:", vertex)?;
            for edge in edges {
                write!(f, " {}({})", edge.dest, edge.weight)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty_vertex_set() {
        assert_eq!(Graph::new(0), Err(GraphError::InvalidVertexCount(0)));
        assert_eq!(Graph::new(1).unwrap().vertex_count(), 1);
    }

    #[test]
    fn test_add_edge_mirrors_entries() {
        let mut graph = Graph::new(3).unwrap();
        graph.add_weighted_edge(0, 2, 7).unwrap();

        assert_eq!(graph.neighbors(0).unwrap(), &[Edge { dest: 2, weight: 7 }]);
        assert_eq!(graph.neighbors(2).unwrap(), &[Edge { dest: 0, weight: 7 }]);
        assert!(graph.neighbors(1).unwrap().is_empty());
    }

    #[test]
    fn test_self_loop_is_stored_once() {
        let mut graph = Graph::new(2).unwrap();
        graph.add_edge(1, 1).unwrap();

        assert_eq!(graph.neighbors(1).unwrap().len(), 1);
        assert_eq!(graph.degree(1).unwrap(), 2);
        assert_eq!(graph.edges(), vec![(1, 1, 1)]);
    }

    #[test]
    fn test_out_of_range_vertex_is_rejected() {
        let mut graph = Graph::new(4).unwrap();
        assert_eq!(
            graph.add_edge(0, 4),
            Err(GraphError::VertexOutOfRange { vertex: 4, vertex_count: 4 })
        );
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_remove_edge_deletes_one_mirrored_pair() {
        let mut graph = Graph::new(3).unwrap();
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(1, 2).unwrap();

        graph.remove_edge(1, 0).unwrap();

        assert_eq!(graph.edges(), vec![(0, 1, 1), (1, 2, 1)]);
        assert_eq!(graph.degree(0).unwrap(), 1);
        assert_eq!(graph.degree(1).unwrap(), 2);
    }

    #[test]
    fn test_remove_missing_edge_fails() {
        let mut graph = Graph::new(3).unwrap();
        graph.add_edge(0, 1).unwrap();

        assert_eq!(graph.remove_edge(1, 2), Err(GraphError::EdgeNotFound { from: 1, to: 2 }));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_edges_keep_parallel_entries() {
        let mut graph = Graph::new(2).unwrap();
        graph.add_weighted_edge(1, 0, 3).unwrap();
        graph.add_weighted_edge(0, 1, 5).unwrap();

        assert_eq!(graph.edges(), vec![(0, 1, 3), (0, 1, 5)]);
    }

    #[test]
    fn test_neighbor_sets_are_sorted_distinct_and_loop_free() {
        let mut graph = Graph::new(4).unwrap();
        graph.add_edge(2, 0).unwrap();
        graph.add_edge(0, 3).unwrap();
        graph.add_edge(0, 2).unwrap();
        graph.add_edge(0, 0).unwrap();

        assert_eq!(graph.neighbor_sets(), vec![vec![2, 3], vec![], vec![0], vec![0]]);
    }

    #[test]
    fn test_display_lists_adjacency() {
        let mut graph = Graph::new(2).unwrap();
        graph.add_weighted_edge(0, 1, 9).unwrap();

        assert_eq!(graph.to_string(), "0: 1(9)\n1: 0(9)\n");
    }
}
