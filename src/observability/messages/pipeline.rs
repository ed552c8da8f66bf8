// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for pipeline worker and job events.
//!
//! This module contains message types for logging events related to:
//! * Stage and sink worker lifecycle
//! * Per-job stage execution (start, completion, failure)
//! * Job submission, completion and aborts during shutdown

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::time::Duration;
use tracing::Span;

/// A stage or sink worker thread entered its loop.
///
/// # Log Level
/// `info!` - Important operational event
pub struct WorkerStarted<'a> {
    pub worker: &'a str,
}

impl Display for WorkerStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Pipeline worker '{}' started", self.worker)
    }
}

impl StructuredLog for WorkerStarted<'_> {
    fn log(&self) {
        tracing::info!(worker = self.worker, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("worker", span_name = name, worker = self.worker)
    }
}

/// A worker saw its queue closed and left its loop.
///
/// # Log Level
/// `info!` - Important operational event
pub struct WorkerStopped<'a> {
    pub worker: &'a str,
    pub jobs_processed: u64,
}

impl Display for WorkerStopped<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Pipeline worker '{}' stopped after {} jobs",
            self.worker, self.jobs_processed
        )
    }
}

impl StructuredLog for WorkerStopped<'_> {
    fn log(&self) {
        tracing::info!(worker = self.worker, jobs_processed = self.jobs_processed, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "worker_stopped",
            span_name = name,
            worker = self.worker,
            jobs_processed = self.jobs_processed,
        )
    }
}

/// A job entered the pipeline's entry queue.
///
/// # Log Level
/// `debug!` - Routine per-job detail
pub struct JobSubmitted {
    pub job_id: u64,
    pub vertex_count: usize,
}

impl Display for JobSubmitted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Job {} submitted ({} vertices)", self.job_id, self.vertex_count)
    }
}

impl StructuredLog for JobSubmitted {
    fn log(&self) {
        tracing::debug!(job_id = self.job_id, vertex_count = self.vertex_count, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("job", span_name = name, job_id = self.job_id)
    }
}

/// A stage worker picked up a job.
///
/// # Log Level
/// `debug!` - Routine per-job detail
///
/// # Example
/// ```
/// use the_graphmill::observability::messages::pipeline::StageStarted;
///
/// let msg = StageStarted { stage: "HAMILTON", job_id: 12 };
/// assert_eq!(msg.to_string(), "[HAMILTON] starting job 12");
/// ```
pub struct StageStarted<'a> {
    pub stage: &'a str,
    pub job_id: u64,
}

impl Display for StageStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "[{}] starting job {}", self.stage, self.job_id)
    }
}

impl StructuredLog for StageStarted<'_> {
    fn log(&self) {
        tracing::debug!(stage = self.stage, job_id = self.job_id, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("stage", span_name = name, stage = self.stage, job_id = self.job_id)
    }
}

/// A stage appended its result and is handing the job downstream.
///
/// # Log Level
/// `debug!` - Routine per-job detail
pub struct StageCompleted<'a> {
    pub stage: &'a str,
    pub job_id: u64,
    pub duration: Duration,
}

impl Display for StageCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "[{}] job {} moving to next stage after {:?}",
            self.stage, self.job_id, self.duration
        )
    }
}

impl StructuredLog for StageCompleted<'_> {
    fn log(&self) {
        tracing::debug!(
            stage = self.stage,
            job_id = self.job_id,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "stage_completed",
            span_name = name,
            stage = self.stage,
            job_id = self.job_id,
            duration = ?self.duration,
        )
    }
}

/// An algorithm unit panicked; the stage recorded `ERR STAGE_FAILED` and
/// kept running.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct StageFailed<'a> {
    pub stage: &'a str,
    pub job_id: u64,
    pub reason: &'a str,
}

impl Display for StageFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "[{}] job {} failed: {}", self.stage, self.job_id, self.reason)
    }
}

impl StructuredLog for StageFailed<'_> {
    fn log(&self) {
        tracing::error!(stage = self.stage, job_id = self.job_id, reason = self.reason, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "stage_failed",
            span_name = name,
            stage = self.stage,
            job_id = self.job_id,
            reason = self.reason,
        )
    }
}

/// The sink marked a job complete and woke its submitter.
///
/// # Log Level
/// `debug!` - Routine per-job detail
pub struct JobCompleted {
    pub job_id: u64,
}

impl Display for JobCompleted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "sink: notified job {}", self.job_id)
    }
}

impl StructuredLog for JobCompleted {
    fn log(&self) {
        tracing::debug!(job_id = self.job_id, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("job_completed", span_name = name, job_id = self.job_id)
    }
}

/// Shutdown took a job out of the pipeline before it reached the sink; its
/// waiter is woken with `ERR SHUTTING_DOWN`.
///
/// # Log Level
/// `warn!` - The job's remaining stages never ran
pub struct JobAborted<'a> {
    /// Last stage the job finished, or `"entry"` if it never started.
    pub stage: &'a str,
    pub job_id: u64,
}

impl Display for JobAborted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Job {} aborted after '{}': pipeline shutting down", self.job_id, self.stage)
    }
}

impl StructuredLog for JobAborted<'_> {
    fn log(&self) {
        tracing::warn!(stage = self.stage, job_id = self.job_id, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "job_aborted",
            span_name = name,
            stage = self.stage,
            job_id = self.job_id,
        )
    }
}

/// Shutdown closed every queue and joined the workers.
///
/// # Log Level
/// `info!` - Important operational event
pub struct PipelineShutdown {
    pub workers_joined: usize,
    pub jobs_submitted: u64,
    pub jobs_completed: u64,
}

impl Display for PipelineShutdown {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Pipeline shut down: {} workers joined, {}/{} jobs completed",
            self.workers_joined, self.jobs_completed, self.jobs_submitted
        )
    }
}

impl StructuredLog for PipelineShutdown {
    fn log(&self) {
        tracing::info!(
            workers_joined = self.workers_joined,
            jobs_submitted = self.jobs_submitted,
            jobs_completed = self.jobs_completed,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "pipeline_shutdown",
            span_name = name,
            workers_joined = self.workers_joined,
        )
    }
}
