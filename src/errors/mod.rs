// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod algorithm;
mod config;
mod graph;
mod pipeline;
mod request;

pub use algorithm::UnknownAlgorithm;
pub use config::ConfigError;
pub use graph::GraphError;
pub use pipeline::PipelineError;
pub use request::RequestError;
