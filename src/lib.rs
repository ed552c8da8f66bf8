// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod algorithms; // built-in algorithm units
pub mod config;     // server config + algorithm registry
pub mod engine;     // job pipeline
pub mod errors;     // error handling
pub mod graph;      // graph model
pub mod observability;
pub mod protocol;   // request text format
pub mod server;     // tcp front end + console
pub mod traits;     // unified abstractions
