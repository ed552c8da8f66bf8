// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for inbound request handling.
//!
//! `Display` renders the exact response line sent back to the client, so a
//! connection handler can write `format!("{}\n", err)` without translation.

use thiserror::Error;

use crate::errors::{GraphError, UnknownAlgorithm};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// The connection could not be read to completion.
    #[error("ERR READ_FAILED")]
    ReadFailed,

    /// The request text was malformed or described an invalid graph.
    #[error("ERR PARSE_FAILED: {0}")]
    Parse(String),

    /// A legacy `ALG <name>` request named an unregistered algorithm.
    #[error(transparent)]
    UnknownAlgorithm(#[from] UnknownAlgorithm),
}

impl RequestError {
    pub fn parse(detail: impl Into<String>) -> Self {
        RequestError::Parse(detail.into())
    }
}

impl From<GraphError> for RequestError {
    fn from(err: GraphError) -> Self {
        RequestError::Parse(err.to_string())
    }
}
