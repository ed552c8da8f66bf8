// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::algorithms::euler::join_vertices;
use crate::graph::Graph;
use crate::traits::Algorithm;

/// Maximum clique via Bron-Kerbosch with pivoting.
///
/// The outer level walks the vertices in order, handing each one its later
/// neighbours as candidates and its earlier ones as excluded, so no level of
/// the search ever holds the whole vertex set.
pub struct MaxCliqueAlgorithm;

impl MaxCliqueAlgorithm {
    pub fn new() -> Self {
        Self
    }

    /// Members of one largest clique in ascending order.
    pub fn max_clique(graph: &Graph) -> Vec<usize> {
        let mut search = CliqueSearch {
            neighbors: graph.neighbor_sets(),
            best: Vec::new(),
        };

        for vertex in 0..graph.vertex_count() {
            let set = &search.neighbors[vertex];
            if set.len() < search.best.len() {
                continue;
            }
            let (earlier, later): (Vec<usize>, Vec<usize>) =
                set.iter().partition(|&&other| other < vertex);
            search.expand(vec![vertex], later, earlier);
        }

        let mut best = search.best;
        best.sort_unstable();
        best
    }
}

impl Algorithm for MaxCliqueAlgorithm {
    fn run(&self, graph: &Graph) -> String {
        let clique = Self::max_clique(graph);
        if clique.is_empty() {
            return "ERR NO CLIQUE\n".to_string();
        }
        format!(
            "OK MAX CLIQUE SIZE: {}\nCLIQUE MEMBERS: {}\n",
            clique.len(),
            join_vertices(&clique)
        )
    }

    fn name(&self) -> &'static str {
        "MAXCLIQUE"
    }
}

struct CliqueSearch {
    /// Sorted distinct neighbours per vertex.
    neighbors: Vec<Vec<usize>>,
    best: Vec<usize>,
}

impl CliqueSearch {
    fn adjacent(&self, a: usize, b: usize) -> bool {
        self.neighbors[a].binary_search(&b).is_ok()
    }

    /// `clique` is R, `candidates` is P, `excluded` is X.
    fn expand(
        &mut self,
        clique: Vec<usize>,
        mut candidates: Vec<usize>,
        mut excluded: Vec<usize>,
    ) {
        if candidates.is_empty() && excluded.is_empty() {
            if clique.len() > self.best.len() {
                self.best = clique;
            }
            return;
        }
        // Cannot beat the best clique from here.
        if clique.len() + candidates.len() <= self.best.len() {
            return;
        }

        // Pivot on the vertex of P ∪ X with the most neighbours in P; its
        // neighbours are covered by the branches of the other vertices.
        let pivot = candidates
            .iter()
            .chain(excluded.iter())
            .copied()
            .max_by_key(|&u| candidates.iter().filter(|&&v| self.adjacent(u, v)).count());

        let branches: Vec<usize> = candidates
            .iter()
            .copied()
            .filter(|&v| pivot.map_or(true, |u| !self.adjacent(u, v)))
            .collect();

        for vertex in branches {
            let mut next_clique = clique.clone();
            next_clique.push(vertex);
            let next_candidates = self.within_neighborhood(vertex, &candidates);
            let next_excluded = self.within_neighborhood(vertex, &excluded);

            self.expand(next_clique, next_candidates, next_excluded);

            candidates.retain(|&w| w != vertex);
            excluded.push(vertex);
        }
    }

    fn within_neighborhood(&self, vertex: usize, members: &[usize]) -> Vec<usize> {
        members.iter().copied().filter(|&w| self.adjacent(vertex, w)).collect()
    }
}
