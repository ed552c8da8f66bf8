// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;
use std::sync::Arc;

use crate::algorithms::{AlgorithmFactory, AlgorithmKind};
use crate::traits::Algorithm;

/// Builds a fresh algorithm unit.
pub type AlgorithmConstructor = Arc<dyn Fn() -> Box<dyn Algorithm> + Send + Sync>;

/// Name -> constructor table consulted by stage workers and legacy requests.
///
/// Lookup of an unregistered name yields `None`; callers turn that into an
/// `ERR UNKNOWN ALGORITHM <name>` result line.
///
/// # Example
/// ```
/// use the_graphmill::config::AlgorithmRegistry;
///
/// let registry = AlgorithmRegistry::with_builtins();
/// assert!(registry.create("MST").is_some());
/// assert!(registry.create("DIJKSTRA").is_none());
/// ```
#[derive(Clone, Default)]
pub struct AlgorithmRegistry(HashMap<String, AlgorithmConstructor>);

impl AlgorithmRegistry {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Registry holding every [`AlgorithmKind`] under its wire name.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for kind in AlgorithmKind::ALL {
            registry.register(kind.as_str(), move || AlgorithmFactory::create(kind));
        }
        registry
    }

    /// Registers (or replaces) the constructor for `name`.
    pub fn register<F>(&mut self, name: &str, constructor: F)
    where
        F: Fn() -> Box<dyn Algorithm> + Send + Sync + 'static,
    {
        self.0.insert(name.to_string(), Arc::new(constructor));
    }

    pub fn create(&self, name: &str) -> Option<Box<dyn Algorithm>> {
        self.0.get(name).map(|constructor| constructor())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.0.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl std::fmt::Debug for AlgorithmRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlgorithmRegistry")
            .field("algorithm_count", &self.0.len())
            .field("algorithm_names", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    struct ConstantAlgorithm;

    impl Algorithm for ConstantAlgorithm {
        fn run(&self, _graph: &Graph) -> String {
            "OK CONSTANT\n".to_string()
        }

        fn name(&self) -> &'static str {
            "CONSTANT"
        }
    }

    #[test]
    fn test_builtins_are_registered() {
        let registry = AlgorithmRegistry::with_builtins();
        assert_eq!(
            registry.names(),
            vec!["EULER", "HAMILTON", "MAXCLIQUE", "MAXFLOW", "MST", "SCC"]
        );
        for kind in AlgorithmKind::ALL {
            let unit = registry.create(kind.as_str()).unwrap();
            assert_eq!(unit.name(), kind.as_str());
        }
    }

    #[test]
    fn test_unknown_name_yields_none() {
        let registry = AlgorithmRegistry::with_builtins();
        assert!(registry.create("BELLMAN_FORD").is_none());
        assert!(!registry.contains("BELLMAN_FORD"));
        assert!(AlgorithmRegistry::new().create("MST").is_none());
    }

    #[test]
    fn test_register_custom_unit() {
        let mut registry = AlgorithmRegistry::new();
        registry.register("CONSTANT", || Box::new(ConstantAlgorithm));

        let graph = Graph::new(1).unwrap();
        assert_eq!(registry.create("CONSTANT").unwrap().run(&graph), "OK CONSTANT\n");
    }

    #[test]
    fn test_register_replaces_existing_name() {
        let mut registry = AlgorithmRegistry::with_builtins();
        registry.register("MST", || Box::new(ConstantAlgorithm));

        let graph = Graph::new(1).unwrap();
        assert_eq!(registry.create("MST").unwrap().run(&graph), "OK CONSTANT\n");
        assert_eq!(registry.names().len(), 6);
    }

    #[test]
    fn test_debug_lists_names() {
        let rendered = format!("{:?}", AlgorithmRegistry::with_builtins());
        assert!(rendered.contains("algorithm_count: 6"));
        assert!(rendered.contains("\"MAXFLOW\""));
    }
}
