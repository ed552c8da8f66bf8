// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use super::{
    EulerAlgorithm, HamiltonAlgorithm, MaxCliqueAlgorithm, MaxFlowAlgorithm, MstAlgorithm,
    SccAlgorithm,
};
use crate::errors::UnknownAlgorithm;
use crate::traits::Algorithm;

/// Closed set of built-in algorithm units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmKind {
    Euler,
    Mst,
    MaxFlow,
    Hamilton,
    MaxClique,
    Scc,
}

impl AlgorithmKind {
    pub const ALL: [AlgorithmKind; 6] = [
        AlgorithmKind::Euler,
        AlgorithmKind::Mst,
        AlgorithmKind::MaxFlow,
        AlgorithmKind::Hamilton,
        AlgorithmKind::MaxClique,
        AlgorithmKind::Scc,
    ];

    /// Name used on the wire and in the registry.
    pub fn as_str(&self) -> &'static str {
        match self {
            AlgorithmKind::Euler => "EULER",
            AlgorithmKind::Mst => "MST",
            AlgorithmKind::MaxFlow => "MAXFLOW",
            AlgorithmKind::Hamilton => "HAMILTON",
            AlgorithmKind::MaxClique => "MAXCLIQUE",
            AlgorithmKind::Scc => "SCC",
        }
    }

    /// MST and MAXFLOW read edge weights as costs/capacities, so legacy
    /// requests for them must give a weight on every edge line.
    pub fn requires_weights(&self) -> bool {
        matches!(self, AlgorithmKind::Mst | AlgorithmKind::MaxFlow)
    }
}

impl Display for AlgorithmKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlgorithmKind {
    type Err = UnknownAlgorithm;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        AlgorithmKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == name)
            .ok_or_else(|| UnknownAlgorithm(name.to_string()))
    }
}

/// Factory for the built-in units.
pub struct AlgorithmFactory;

impl AlgorithmFactory {
    pub fn create(kind: AlgorithmKind) -> Box<dyn Algorithm> {
        match kind {
            AlgorithmKind::Euler => Box::new(EulerAlgorithm::new()),
            AlgorithmKind::Mst => Box::new(MstAlgorithm::new()),
            AlgorithmKind::MaxFlow => Box::new(MaxFlowAlgorithm::new()),
            AlgorithmKind::Hamilton => Box::new(HamiltonAlgorithm::new()),
            AlgorithmKind::MaxClique => Box::new(MaxCliqueAlgorithm::new()),
            AlgorithmKind::Scc => Box::new(SccAlgorithm::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    #[test]
    fn test_names_round_trip_through_from_str() {
        for kind in AlgorithmKind::ALL {
            assert_eq!(kind.as_str().parse::<AlgorithmKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_unknown_name() {
        let err = "DIJKSTRA".parse::<AlgorithmKind>().unwrap_err();
        assert_eq!(err.to_string(), "ERR UNKNOWN ALGORITHM DIJKSTRA");
        assert!("mst".parse::<AlgorithmKind>().is_err(), "names are case sensitive");
    }

    #[test]
    fn test_created_units_report_their_name() {
        for kind in AlgorithmKind::ALL {
            assert_eq!(AlgorithmFactory::create(kind).name(), kind.as_str());
        }
    }

    #[test]
    fn test_parsed_kind_creates_runnable_unit() {
        let mut graph = Graph::new(2).unwrap();
        graph.add_weighted_edge(0, 1, 6).unwrap();

        let kind: AlgorithmKind = "MST".parse().unwrap();
        assert_eq!(AlgorithmFactory::create(kind).run(&graph), "OK MST WEIGHT: 6\n");
    }

    #[test]
    fn test_weight_requirements() {
        let weighted: Vec<_> = AlgorithmKind::ALL
            .into_iter()
            .filter(AlgorithmKind::requires_weights)
            .collect();
        assert_eq!(weighted, vec![AlgorithmKind::Mst, AlgorithmKind::MaxFlow]);
    }
}
