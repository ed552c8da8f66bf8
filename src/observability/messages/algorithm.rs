// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for algorithm lookup and single-algorithm execution events.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A stage or request named an algorithm the registry does not know.
///
/// # Log Level
/// `warn!` - The caller gets an `ERR UNKNOWN ALGORITHM` line instead of a result
///
/// # Example
/// ```
/// use the_graphmill::observability::messages::algorithm::UnknownAlgorithmRequested;
///
/// let msg = UnknownAlgorithmRequested { name: "DIJKSTRA", context: "stage" };
/// assert!(msg.to_string().contains("DIJKSTRA"));
/// ```
pub struct UnknownAlgorithmRequested<'a> {
    pub name: &'a str,
    /// Who asked: `"stage"` or `"request"`.
    pub context: &'a str,
}

impl Display for UnknownAlgorithmRequested<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Unknown algorithm '{}' requested by {}", self.name, self.context)
    }
}

impl StructuredLog for UnknownAlgorithmRequested<'_> {
    fn log(&self) {
        tracing::warn!(algorithm = self.name, context = self.context, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "unknown_algorithm",
            span_name = name,
            algorithm = self.name,
            context = self.context,
        )
    }
}

/// A legacy single-algorithm request is about to run.
///
/// # Log Level
/// `debug!` - Routine per-request detail
pub struct AlgorithmStarted<'a> {
    pub name: &'a str,
    pub vertex_count: usize,
}

impl Display for AlgorithmStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Algorithm '{}' starting on {} vertices", self.name, self.vertex_count)
    }
}

impl StructuredLog for AlgorithmStarted<'_> {
    fn log(&self) {
        tracing::debug!(algorithm = self.name, vertex_count = self.vertex_count, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "algorithm",
            span_name = name,
            algorithm = self.name,
            vertex_count = self.vertex_count,
        )
    }
}

/// A legacy single-algorithm request finished.
///
/// # Log Level
/// `debug!` - Routine per-request detail
pub struct AlgorithmExecuted<'a> {
    pub name: &'a str,
    pub vertex_count: usize,
    pub duration: std::time::Duration,
}

impl Display for AlgorithmExecuted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Algorithm '{}' ran on {} vertices in {:?}",
            self.name, self.vertex_count, self.duration
        )
    }
}

impl StructuredLog for AlgorithmExecuted<'_> {
    fn log(&self) {
        tracing::debug!(
            algorithm = self.name,
            vertex_count = self.vertex_count,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "algorithm_executed",
            span_name = name,
            algorithm = self.name,
            vertex_count = self.vertex_count,
        )
    }
}
