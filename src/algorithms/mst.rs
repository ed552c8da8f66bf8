// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::graph::Graph;
use crate::traits::Algorithm;

/// Minimum spanning tree weight via Kruskal's algorithm.
///
/// On a disconnected graph the reported weight is that of the minimum
/// spanning forest.
pub struct MstAlgorithm;

impl MstAlgorithm {
    pub fn new() -> Self {
        Self
    }

    /// Total is widened to `i128` so sums of large edge weights stay exact.
    pub fn weight(graph: &Graph) -> i128 {
        let vertex_count = graph.vertex_count();
        let mut edges = graph.edges();
        edges.sort_by_key(|&(_, _, weight)| weight);

        let mut sets = DisjointSet::new(vertex_count);
        let mut total: i128 = 0;
        let mut accepted = 0;
        for (from, to, weight) in edges {
            if accepted + 1 >= vertex_count {
                break;
            }
            if sets.union(from, to) {
                total += i128::from(weight);
                accepted += 1;
            }
        }
        total
    }
}

impl Algorithm for MstAlgorithm {
    fn run(&self, graph: &Graph) -> String {
        format!("OK MST WEIGHT: {}\n", Self::weight(graph))
    }

    fn name(&self) -> &'static str {
        "MST"
    }
}

/// Union-find with path compression and union by rank.
struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u32>,
}

impl DisjointSet {
    fn new(size: usize) -> Self {
        Self {
            parent: (0..size).collect(),
            rank: vec![0; size],
        }
    }

    fn find(&mut self, element: usize) -> usize {
        let mut root = element;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut current = element;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }

    /// Merges the sets of `a` and `b`; false when they were already joined.
    fn union(&mut self, a: usize, b: usize) -> bool {
        let (mut a, mut b) = (self.find(a), self.find(b));
        if a == b {
            return false;
        }
        if self.rank[a] < self.rank[b] {
            std::mem::swap(&mut a, &mut b);
        }
        self.parent[b] = a;
        if self.rank[a] == self.rank[b] {
            self.rank[a] += 1;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weighted(vertex_count: usize, edges: &[(usize, usize, i64)]) -> Graph {
        let mut graph = Graph::new(vertex_count).unwrap();
        for &(from, to, weight) in edges {
            graph.add_weighted_edge(from, to, weight).unwrap();
        }
        graph
    }

    /// Minimum over every (n-1)-edge subset that connects all vertices.
    fn brute_force_spanning_tree(graph: &Graph) -> Option<i128> {
        let edges = graph.edges();
        let needed = graph.vertex_count() - 1;
        let mut best: Option<i128> = None;

        for mask in 0u32..(1 << edges.len()) {
            if mask.count_ones() as usize != needed {
                continue;
            }
            let mut sets = DisjointSet::new(graph.vertex_count());
            let mut total: i128 = 0;
            let mut acyclic = true;
            for (index, &(from, to, weight)) in edges.iter().enumerate() {
                if mask & (1 << index) != 0 {
                    acyclic &= sets.union(from, to);
                    total += i128::from(weight);
                }
            }
            if acyclic {
                best = Some(best.map_or(total, |b| b.min(total)));
            }
        }
        best
    }

    #[test]
    fn test_square_graph_weight() {
        let graph = weighted(4, &[(0, 1, 1), (1, 2, 1), (2, 3, 1), (3, 0, 1)]);
        assert_eq!(MstAlgorithm::new().run(&graph), "OK MST WEIGHT: 3\n");
    }

    #[test]
    fn test_matches_brute_force_on_small_graphs() {
        let fixtures = vec![
            weighted(4, &[(0, 1, 4), (0, 2, 1), (1, 2, 2), (1, 3, 5), (2, 3, 8), (0, 3, 7)]),
            weighted(
                5,
                &[(0, 1, 2), (1, 2, 3), (2, 3, 1), (3, 4, 6), (4, 0, 5), (1, 3, 2), (0, 2, 9)],
            ),
            weighted(
                6,
                &[
                    (0, 1, 3),
                    (1, 2, 3),
                    (2, 3, 3),
                    (3, 4, 3),
                    (4, 5, 3),
                    (5, 0, 1),
                    (0, 3, 2),
                    (1, 4, 10),
                ],
            ),
            weighted(3, &[(0, 1, 5), (0, 1, 2), (1, 2, 7), (2, 0, 7)]),
        ];

        for graph in fixtures {
            assert_eq!(
                Some(MstAlgorithm::weight(&graph)),
                brute_force_spanning_tree(&graph),
                "{}",
                graph
            );
        }
    }

    #[test]
    fn test_disconnected_graph_reports_forest_weight() {
        let graph = weighted(5, &[(0, 1, 3), (1, 2, 1), (0, 2, 2), (3, 4, 10)]);
        assert_eq!(MstAlgorithm::weight(&graph), 13);
    }

    #[test]
    fn test_single_vertex_and_self_loop() {
        let graph = weighted(1, &[(0, 0, 4)]);
        assert_eq!(MstAlgorithm::weight(&graph), 0);
    }

    #[test]
    fn test_weight_sum_beyond_i64_is_exact() {
        let graph = weighted(3, &[(0, 1, i64::MAX), (1, 2, i64::MAX)]);
        assert_eq!(
            MstAlgorithm::new().run(&graph),
            "OK MST WEIGHT: 18446744073709551614\n"
        );
    }

    #[test]
    fn test_disjoint_set_union_by_rank() {
        let mut sets = DisjointSet::new(4);
        assert!(sets.union(0, 1));
        assert!(sets.union(2, 3));
        assert!(sets.union(1, 3));
        assert!(!sets.union(0, 2));
        assert_eq!(sets.find(0), sets.find(3));
    }
}
