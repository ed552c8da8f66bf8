// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Job pipeline: blocking queues, the shared job record and the stage
//! orchestrator that moves jobs through the fixed algorithm chain.

pub mod blocking_queue;
pub mod job;
pub mod pipeline;

pub use blocking_queue::BlockingQueue;
pub use job::{Job, JobHandle, SHUTDOWN_LINE};
pub use pipeline::{Pipeline, PipelineStats, STAGES};
