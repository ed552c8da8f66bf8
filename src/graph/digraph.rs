// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::GraphError;
use crate::graph::Graph;

/// Directed graph with plain successor lists. Arcs are never mirrored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digraph {
    successors: Vec<Vec<usize>>,
}

impl Digraph {
    pub fn new(vertex_count: usize) -> Result<Self, GraphError> {
        if vertex_count == 0 {
            return Err(GraphError::InvalidVertexCount(vertex_count));
        }
        Ok(Self {
            successors: vec![Vec::new(); vertex_count],
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.successors.len()
    }

    pub fn add_arc(&mut self, from: usize, to: usize) -> Result<(), GraphError> {
        let vertex_count = self.vertex_count();
        for vertex in [from, to] {
            if vertex >= vertex_count {
                return Err(GraphError::VertexOutOfRange { vertex, vertex_count });
            }
        }
        self.successors[from].push(to);
        Ok(())
    }

    /// Successors of `vertex`; empty for an out-of-range index.
    pub fn adj(&self, vertex: usize) -> &[usize] {
        self.successors.get(vertex).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Same vertex set with every arc reversed.
    pub fn transpose(&self) -> Digraph {
        let mut reversed = vec![Vec::new(); self.vertex_count()];
        for (from, targets) in self.successors.iter().enumerate() {
            for &to in targets {
                reversed[to].push(from);
            }
        }
        Digraph { successors: reversed }
    }
}

/// Every stored adjacency entry of the undirected graph becomes one arc, so
/// each undirected edge turns into a pair of opposite arcs.
impl From<&Graph> for Digraph {
    fn from(graph: &Graph) -> Self {
        let successors = (0..graph.vertex_count())
            .map(|vertex| graph.adjacent(vertex).iter().map(|edge| edge.dest).collect())
            .collect();
        Digraph { successors }
    }
}
