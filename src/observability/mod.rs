// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! Every diagnostic line the crate emits is a message type from
//! [`messages`]: a small struct with a `Display` implementation and a
//! [`StructuredLog`](messages::StructuredLog) implementation that logs it at a
//! fixed level with structured fields. Worker threads, connection tasks and
//! the console all log through the single `tracing` subscriber installed by
//! the binary, which writes each event whole, so lines from different threads
//! never interleave.
//!
//! # Usage
//!
//! ```rust
//! use the_graphmill::observability::messages::pipeline::StageCompleted;
//! use the_graphmill::observability::messages::StructuredLog;
//! use std::time::Duration;
//!
//! StageCompleted {
//!     stage: "MST",
//!     job_id: 7,
//!     duration: Duration::from_millis(3),
//! }
//! .log();
//! ```

pub mod messages;
