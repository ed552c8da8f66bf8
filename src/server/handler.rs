// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Turns one request text into one response text.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::algorithms::{AlgorithmFactory, AlgorithmKind, SccAlgorithm};
use crate::engine::Pipeline;
use crate::errors::{PipelineError, RequestError};
use crate::graph::Graph;
use crate::observability::messages::algorithm::{AlgorithmExecuted, AlgorithmStarted};
use crate::observability::messages::server::RequestRejected;
use crate::observability::messages::StructuredLog;
use crate::protocol::{parse_request, Request, RequestLimits};

/// Parses `text`, runs what it asks for and returns the response lines.
///
/// Pipeline requests block a worker of tokio's blocking pool while the job
/// travels through the stages; `timeout` bounds that wait. Headers beyond
/// `limits` are rejected before any graph is built.
pub async fn handle_request(
    text: &str,
    pipeline: &Arc<Pipeline>,
    timeout: Option<Duration>,
    limits: RequestLimits,
) -> String {
    let request = match parse_request(text, limits) {
        Ok(request) => request,
        Err(err) => return reject(&err),
    };

    match request {
        Request::Pipeline { graph } => {
            let pipeline = Arc::clone(pipeline);
            let joined =
                tokio::task::spawn_blocking(move || pipeline.run_job(&graph, timeout)).await;
            match joined {
                Ok(Ok(result)) => result,
                Ok(Err(err)) => pipeline_error_line(&err).to_string(),
                Err(_) => "ERR INTERNAL\n".to_string(),
            }
        }
        Request::Single { algorithm, graph } => {
            let joined = tokio::task::spawn_blocking(move || run_single(algorithm, &graph)).await;
            joined.unwrap_or_else(|_| format!("ERR STAGE_FAILED {}\n", algorithm))
        }
        Request::Directed { graph } => {
            let joined =
                tokio::task::spawn_blocking(move || SccAlgorithm::new().run_directed(&graph)).await;
            joined.unwrap_or_else(|_| format!("ERR STAGE_FAILED {}\n", AlgorithmKind::Scc))
        }
    }
}

fn reject(err: &RequestError) -> String {
    let line = err.to_string();
    RequestRejected { reason: &line }.log();
    format!("{}\n", line)
}

fn run_single(algorithm: AlgorithmKind, graph: &Graph) -> String {
    let start_msg = AlgorithmStarted {
        name: algorithm.as_str(),
        vertex_count: graph.vertex_count(),
    };
    let span = start_msg.span("single_algorithm");
    let _guard = span.enter();
    start_msg.log();

    let started = Instant::now();
    let result = AlgorithmFactory::create(algorithm).run(graph);
    AlgorithmExecuted {
        name: algorithm.as_str(),
        vertex_count: graph.vertex_count(),
        duration: started.elapsed(),
    }
    .log();
    result
}

fn pipeline_error_line(err: &PipelineError) -> &'static str {
    match err {
        PipelineError::ShutDown => "ERR SHUTTING_DOWN\n",
        PipelineError::Timeout { .. } => "ERR TIMEOUT\n",
    }
}
