// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::algorithms::euler::join_vertices;
use crate::graph::Graph;
use crate::traits::Algorithm;

/// Hamiltonian cycle by exhaustive backtracking.
///
/// The search fixes vertex 0 as the start so rotations of one cycle are not
/// explored twice. It keeps an explicit stack of neighbour cursors instead of
/// recursing, so path length is bounded by the vertex count and not by the
/// thread stack. Worst case is still exponential and no time limit is
/// applied.
pub struct HamiltonAlgorithm;

impl HamiltonAlgorithm {
    pub fn new() -> Self {
        Self
    }

    /// The cycle closed back to its start (`[0, .., 0]`), or `None`.
    pub fn hamiltonian_cycle(graph: &Graph) -> Option<Vec<usize>> {
        let vertex_count = graph.vertex_count();
        if vertex_count <= 1 {
            return None;
        }

        let neighbors = graph.neighbor_sets();
        // On three or more vertices every cycle member needs two distinct neighbours.
        if vertex_count >= 3 && neighbors.iter().any(|set| set.len() < 2) {
            return None;
        }

        let mut path = Vec::with_capacity(vertex_count + 1);
        let mut cursors = Vec::with_capacity(vertex_count);
        let mut used = vec![false; vertex_count];
        path.push(0);
        cursors.push(0);
        used[0] = true;

        while let Some(&last) = path.last() {
            if path.len() == vertex_count {
                if neighbors[last].binary_search(&0).is_ok() {
                    path.push(0);
                    return Some(path);
                }
            } else if let Some(next) = advance(&neighbors[last], &mut cursors, &used) {
                used[next] = true;
                path.push(next);
                cursors.push(0);
                continue;
            }

            used[last] = false;
            path.pop();
            cursors.pop();
        }
        None
    }
}

impl Algorithm for HamiltonAlgorithm {
    fn run(&self, graph: &Graph) -> String {
        match Self::hamiltonian_cycle(graph) {
            Some(cycle) => format!("OK {}\n", join_vertices(&cycle)),
            None => "ERR NO HAMILTONIAN CYCLE\n".to_string(),
        }
    }

    fn name(&self) -> &'static str {
        "HAMILTON"
    }
}

/// Moves the top cursor to the next unused neighbour and returns it.
fn advance(candidates: &[usize], cursors: &mut [usize], used: &[bool]) -> Option<usize> {
    let cursor = cursors.last_mut()?;
    while let Some(&next) = candidates.get(*cursor) {
        *cursor += 1;
        if !used[next] {
            return Some(next);
        }
    }
    None
}
