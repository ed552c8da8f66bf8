// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Text request format.
//!
//! ```text
//! GRAPH V <n> E <m>          full pipeline over the m edge lines that follow
//! RANDOM V <n> E <m>         full pipeline over m random edges, weights 1..=10
//! ALG <name> V <n> E <m>     one algorithm over the m edge lines that follow
//! ```
//!
//! Edge lines are `<u> <v> [<w>]`, one per line, weight defaulting to 1.
//! `ALG SCC` reads them as directed arcs. Header counts above the configured
//! [`RequestLimits`] are rejected before the graph is built.

pub mod random;
pub mod request;

pub use random::random_graph;
pub use request::{parse_request, parse_request_with_rng, Request, RequestLimits};
