// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::consts::RANDOM_MAX_WEIGHT;
use crate::errors::RequestError;
use crate::graph::Graph;

/// Builds a graph with `edge_count` distinct undirected edges, no self-loops,
/// each weighted uniformly in `1..=RANDOM_MAX_WEIGHT`.
pub fn random_graph<R: Rng>(
    vertex_count: usize,
    edge_count: usize,
    rng: &mut R,
) -> Result<Graph, RequestError> {
    let mut graph = Graph::new(vertex_count)?;
    let possible = vertex_count
        .checked_mul(vertex_count - 1)
        .map_or(usize::MAX, |pairs| pairs / 2);
    if edge_count > possible {
        return Err(RequestError::parse("too many edges for random graph"));
    }

    for (from, to) in pick_pairs(vertex_count, edge_count, possible, rng) {
        graph.add_weighted_edge(from, to, rng.gen_range(1..=RANDOM_MAX_WEIGHT))?;
    }
    Ok(graph)
}

fn pick_pairs<R: Rng>(
    vertex_count: usize,
    edge_count: usize,
    possible: usize,
    rng: &mut R,
) -> Vec<(usize, usize)> {
    // Sparse requests sample by rejection; dense ones shuffle every pair.
    if edge_count <= possible / 2 {
        let mut seen = HashSet::with_capacity(edge_count);
        let mut pairs = Vec::with_capacity(edge_count);
        while pairs.len() < edge_count {
            let from = rng.gen_range(0..vertex_count);
            let to = rng.gen_range(0..vertex_count);
            if from == to {
                continue;
            }
            let key = (from.min(to), from.max(to));
            if seen.insert(key) {
                pairs.push((from, to));
            }
        }
        pairs
    } else {
        let mut pairs: Vec<(usize, usize)> = (0..vertex_count)
            .flat_map(|from| (from + 1..vertex_count).map(move |to| (from, to)))
            .collect();
        pairs.shuffle(rng);
        pairs.truncate(edge_count);
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn assert_simple(graph: &Graph, edge_count: usize) {
        let edges = graph.edges();
        assert_eq!(edges.len(), edge_count);
        let mut pairs: Vec<(usize, usize)> = edges.iter().map(|&(u, v, _)| (u, v)).collect();
        pairs.sort_unstable();
        pairs.dedup();
        assert_eq!(pairs.len(), edge_count, "duplicate edge in {:?}", edges);
        for (from, to, weight) in edges {
            assert_ne!(from, to);
            assert!((1..=RANDOM_MAX_WEIGHT).contains(&weight));
        }
    }

    #[test]
    fn test_sparse_random_graph() {
        let mut rng = StdRng::seed_from_u64(7);
        let graph = random_graph(50, 40, &mut rng).unwrap();
        assert_eq!(graph.vertex_count(), 50);
        assert_simple(&graph, 40);
    }

    #[test]
    fn test_dense_random_graph_can_be_complete() {
        let mut rng = StdRng::seed_from_u64(11);
        let graph = random_graph(6, 15, &mut rng).unwrap();
        assert_simple(&graph, 15);
    }

    #[test]
    fn test_too_many_edges_rejected() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(
            random_graph(4, 7, &mut rng).unwrap_err().to_string(),
            "ERR PARSE_FAILED: too many edges for random graph"
        );
        assert!(random_graph(1, 1, &mut rng).is_err());
    }

    #[test]
    fn test_single_vertex_without_edges() {
        let mut rng = StdRng::seed_from_u64(5);
        let graph = random_graph(1, 0, &mut rng).unwrap();
        assert_eq!(graph.edge_count(), 0);
    }
}
