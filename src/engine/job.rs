// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The unit of pipelined work.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use crate::graph::Graph;

static NEXT_JOB_ID: AtomicU64 = AtomicU64::new(1);

/// Appended to a job that shutdown removed from the pipeline.
pub const SHUTDOWN_LINE: &str = "ERR SHUTTING_DOWN\n";

/// Shared handle passed between the submitter and every stage.
pub type JobHandle = Arc<Job>;

#[derive(Default)]
struct JobState {
    result: String,
    completed: bool,
    aborted: bool,
}

/// One graph travelling through the pipeline, plus the result text each
/// stage appends to it.
///
/// Stages share the same instance, so the result buffer is a single running
/// text. The submitter blocks on [`wait`](Self::wait) or
/// [`wait_timeout`](Self::wait_timeout) until the sink marks it complete or
/// shutdown [aborts](Self::abort) it.
pub struct Job {
    id: u64,
    graph: Arc<Graph>,
    state: Mutex<JobState>,
    done: Condvar,
}

impl Job {
    /// Snapshots `graph` and assigns the next process-wide id.
    pub fn new(graph: &Graph) -> JobHandle {
        Arc::new(Self {
            id: NEXT_JOB_ID.fetch_add(1, Ordering::Relaxed),
            graph: Arc::new(graph.clone()),
            state: Mutex::new(JobState::default()),
            done: Condvar::new(),
        })
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    fn lock(&self) -> MutexGuard<'_, JobState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn append_result(&self, text: &str) {
        self.lock().result.push_str(text);
    }

    /// Sets the completion flag and wakes every waiter.
    pub fn mark_completed(&self) {
        self.lock().completed = true;
        self.done.notify_all();
    }

    /// Completes the job without the sink: appends [`SHUTDOWN_LINE`] and
    /// wakes every waiter. Returns `false` if the job was already complete.
    pub fn abort(&self) -> bool {
        let mut state = self.lock();
        if state.completed {
            return false;
        }
        state.result.push_str(SHUTDOWN_LINE);
        state.completed = true;
        state.aborted = true;
        drop(state);
        self.done.notify_all();
        true
    }

    pub fn is_completed(&self) -> bool {
        self.lock().completed
    }

    pub fn is_aborted(&self) -> bool {
        self.lock().aborted
    }

    /// Result text accumulated so far, complete or not.
    pub fn result_snapshot(&self) -> String {
        self.lock().result.clone()
    }

    /// Blocks until the job is complete and returns its result.
    pub fn wait(&self) -> String {
        let mut state = self.lock();
        while !state.completed {
            state = self.done.wait(state).unwrap_or_else(PoisonError::into_inner);
        }
        state.result.clone()
    }

    /// Like [`wait`](Self::wait) but gives up after `timeout`.
    pub fn wait_timeout(&self, timeout: Duration) -> Option<String> {
        let deadline = Instant::now() + timeout;
        let mut state = self.lock();
        while !state.completed {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return None;
            }
            state = self
                .done
                .wait_timeout(state, remaining)
                .unwrap_or_else(PoisonError::into_inner)
                .0;
        }
        Some(state.result.clone())
    }
}

impl std::fmt::Debug for Job {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Job")
            .field("id", &self.id)
            .field("vertex_count", &self.graph.vertex_count())
            .field("completed", &self.is_completed())
            .finish()
    }
}
