// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! * `pipeline` - stage worker lifecycle and per-job stage events
//! * `algorithm` - algorithm registry lookups
//! * `server` - listener, connection and console events

use tracing::Span;

pub mod algorithm;
pub mod pipeline;
pub mod server;

/// A message that knows its own log level and structured fields.
pub trait StructuredLog {
    /// Emit the event.
    fn log(&self);

    /// Open a span carrying the same fields.
    fn span(&self, name: &str) -> Span;
}
