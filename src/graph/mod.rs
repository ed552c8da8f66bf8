// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Graph data model shared by every algorithm unit.
//!
//! * [`Graph`] - undirected multigraph with weighted, mirrored adjacency lists
//! * [`Digraph`] - directed graph used by the strongly connected components unit
//!
//! Both have a vertex set `{0..n-1}` fixed at construction. Neither type knows
//! anything about the pipeline; a graph handed to a job is snapshotted and
//! never mutated again.

mod digraph;
mod undirected;

pub use digraph::Digraph;
pub use undirected::{Edge, Graph, DEFAULT_WEIGHT};
