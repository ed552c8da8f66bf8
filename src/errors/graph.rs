// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised while building or editing a graph.

use thiserror::Error;

/// Validation failures of the graph model.
///
/// These never reach a pipeline stage: a graph is validated while it is being
/// built from a request, and the request is rejected before a job exists.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A graph must have at least one vertex.
    #[error("invalid vertex count {0}")]
    InvalidVertexCount(usize),

    /// An edge referenced a vertex outside `[0, vertex_count)`.
    #[error("vertex {vertex} out of range [0, {vertex_count})")]
    VertexOutOfRange { vertex: usize, vertex_count: usize },

    /// `remove_edge` found no matching edge.
    #[error("edge {from}-{to} not found")]
    EdgeNotFound { from: usize, to: usize },
}
