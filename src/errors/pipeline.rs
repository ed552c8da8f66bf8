// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::time::Duration;
use thiserror::Error;

/// Failures a submitter can observe around a pipeline job.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    /// The pipeline stopped accepting jobs, or shutdown aborted the job
    /// before it reached the sink.
    #[error("pipeline is shut down")]
    ShutDown,

    /// The job did not complete within the caller's deadline.
    #[error("job {job_id} did not complete within {timeout:?}")]
    Timeout { job_id: u64, timeout: Duration },
}
