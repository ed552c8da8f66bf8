// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::VecDeque;

use crate::graph::Graph;
use crate::traits::Algorithm;

/// Maximum flow from vertex 0 to vertex n-1 (Edmonds-Karp).
///
/// Each stored adjacency entry becomes a directed arc with the edge weight as
/// capacity, so an undirected edge carries up to its weight in either
/// direction.
pub struct MaxFlowAlgorithm;

impl MaxFlowAlgorithm {
    pub fn new() -> Self {
        Self
    }

    /// Flow value between `source` and `sink`; `None` if any capacity is
    /// negative or an endpoint is out of range. The value is an `i128` since
    /// parallel paths of large capacity can exceed `i64::MAX` in total.
    pub fn max_flow(graph: &Graph, source: usize, sink: usize) -> Option<i128> {
        let mut network = FlowNetwork::new(graph.vertex_count());
        for from in 0..graph.vertex_count() {
            for edge in graph.adjacent(from) {
                if edge.weight < 0 {
                    return None;
                }
                network.add_arc(from, edge.dest, edge.weight);
            }
        }
        network.max_flow(source, sink)
    }
}

impl Algorithm for MaxFlowAlgorithm {
    fn run(&self, graph: &Graph) -> String {
        match Self::max_flow(graph, 0, graph.vertex_count() - 1) {
            Some(flow) => format!("OK MAXFLOW {}\n", flow),
            None => "ERR NEGATIVE CAPACITY\n".to_string(),
        }
    }

    fn name(&self) -> &'static str {
        "MAXFLOW"
    }
}

struct ResidualArc {
    to: usize,
    /// Index of the paired reverse arc in `arcs[to]`.
    reverse: usize,
    capacity: i64,
}

struct FlowNetwork {
    arcs: Vec<Vec<ResidualArc>>,
}

impl FlowNetwork {
    fn new(vertex_count: usize) -> Self {
        Self {
            arcs: (0..vertex_count).map(|_| Vec::new()).collect(),
        }
    }

    fn add_arc(&mut self, from: usize, to: usize, capacity: i64) {
        let forward_index = self.arcs[from].len();
        let reverse_index = self.arcs[to].len() + usize::from(from == to);
        self.arcs[from].push(ResidualArc { to, reverse: reverse_index, capacity });
        self.arcs[to].push(ResidualArc { to: from, reverse: forward_index, capacity: 0 });
    }

    /// Residual capacities never overflow: a forward arc and its reverse
    /// always sum to the original capacity.
    fn max_flow(&mut self, source: usize, sink: usize) -> Option<i128> {
        let vertex_count = self.arcs.len();
        if source >= vertex_count || sink >= vertex_count {
            return None;
        }
        if source == sink {
            return Some(0);
        }

        let mut flow: i128 = 0;
        // parent[v] = (u, arc index in arcs[u]) on the shortest path tree.
        let mut parent: Vec<Option<(usize, usize)>> = vec![None; vertex_count];

        loop {
            parent.iter_mut().for_each(|entry| *entry = None);
            let mut visited = vec![false; vertex_count];
            visited[source] = true;
            let mut queue = VecDeque::from([source]);

            while let Some(vertex) = queue.pop_front() {
                if vertex == sink {
                    break;
                }
                for (index, arc) in self.arcs[vertex].iter().enumerate() {
                    if !visited[arc.to] && arc.capacity > 0 {
                        visited[arc.to] = true;
                        parent[arc.to] = Some((vertex, index));
                        queue.push_back(arc.to);
                    }
                }
            }

            if !visited[sink] {
                return Some(flow);
            }

            let mut bottleneck = i64::MAX;
            let mut vertex = sink;
            while let Some((from, index)) = parent[vertex] {
                bottleneck = bottleneck.min(self.arcs[from][index].capacity);
                vertex = from;
            }

            let mut vertex = sink;
            while let Some((from, index)) = parent[vertex] {
                let (to, reverse) = {
                    let arc = &mut self.arcs[from][index];
                    arc.capacity -= bottleneck;
                    (arc.to, arc.reverse)
                };
                self.arcs[to][reverse].capacity += bottleneck;
                vertex = from;
            }

            flow += i128::from(bottleneck);
        }
    }
}
