use crate::graph::Graph;

/// A pluggable graph algorithm run by one pipeline stage.
///
/// Units are stateless: one instance serves every job that flows through its
/// stage, so `run` must not mutate anything but its own return value. Negative
/// outcomes are part of the contract and come back as an `ERR <REASON>` line
/// rather than a panic. Every returned text ends with a newline.
pub trait Algorithm: Send + Sync {
    fn run(&self, graph: &Graph) -> String;

    /// Wire name the unit is registered under, e.g. `"MST"`.
    fn name(&self) -> &'static str;
}
