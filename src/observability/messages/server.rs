// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for the connection layer and the admin console.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;
use tracing::Span;

/// The listener is bound and accepting connections.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ServerListening<'a> {
    pub address: &'a str,
}

impl Display for ServerListening<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Server listening on {} ...", self.address)
    }
}

impl StructuredLog for ServerListening<'_> {
    fn log(&self) {
        tracing::info!(address = self.address, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("server", span_name = name, address = self.address)
    }
}

/// A client connected.
///
/// # Log Level
/// `debug!` - Routine per-connection detail
pub struct ConnectionAccepted {
    pub peer: SocketAddr,
}

impl Display for ConnectionAccepted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Accepted connection from {}", self.peer)
    }
}

impl StructuredLog for ConnectionAccepted {
    fn log(&self) {
        tracing::debug!(peer = %self.peer, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("connection", span_name = name, peer = %self.peer)
    }
}

/// A request was answered with an error line before reaching any algorithm.
///
/// # Log Level
/// `warn!` - Client-side problem
pub struct RequestRejected<'a> {
    pub reason: &'a str,
}

impl Display for RequestRejected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Request rejected: {}", self.reason)
    }
}

impl StructuredLog for RequestRejected<'_> {
    fn log(&self) {
        tracing::warn!(reason = self.reason, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!("request_rejected", span_name = name, reason = self.reason)
    }
}

/// A response was written back to the client.
///
/// # Log Level
/// `debug!` - Routine per-connection detail
pub struct ResponseWritten {
    pub bytes: usize,
}

impl Display for ResponseWritten {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Response written: {} bytes", self.bytes)
    }
}

impl StructuredLog for ResponseWritten {
    fn log(&self) {
        tracing::debug!(bytes = self.bytes, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("response", span_name = name, bytes = self.bytes)
    }
}

/// An admin command was read from the console.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ConsoleCommand<'a> {
    pub command: &'a str,
}

impl Display for ConsoleCommand<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Console command: {}", self.command)
    }
}

impl StructuredLog for ConsoleCommand<'_> {
    fn log(&self) {
        tracing::info!(command = self.command, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("console", span_name = name, command = self.command)
    }
}

/// The accept loop ended.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ServerStopped;

impl Display for ServerStopped {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Server shut down gracefully")
    }
}

impl StructuredLog for ServerStopped {
    fn log(&self) {
        tracing::info!("{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("server_stopped", span_name = name)
    }
}
