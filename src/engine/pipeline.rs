// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The staged job pipeline.
//!
//! ```text
//! submit -> [entry] -> MST -> [q_mst] -> MAXFLOW -> [q_maxflow]
//!        -> HAMILTON -> [q_ham] -> MAXCLIQUE -> [q_clique] -> sink
//! ```
//!
//! Five long-lived threads, one per queue boundary: four stage workers, each
//! bound to one algorithm and one (input, output) queue pair, and a sink that
//! marks jobs complete. A job visits every stage exactly once and in table
//! order; different jobs overlap freely.
//!
//! # Shutdown
//!
//! [`Pipeline::shutdown`] clears the running flag, closes every queue and
//! joins the workers. A job whose stage is mid-algorithm finishes that stage
//! and is aborted when the downstream push fails. Jobs still sitting in a
//! queue once the workers are gone are aborted too, except those already in
//! the sink queue, which carry every stage result and are completed. Every
//! waiter is woken, so a submitter without a deadline never blocks forever.
//! Joining waits for the algorithm call in progress, so a long Hamiltonian
//! search delays shutdown until it returns.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use serde::Serialize;

use crate::config::AlgorithmRegistry;
use crate::engine::blocking_queue::BlockingQueue;
use crate::engine::job::{Job, JobHandle};
use crate::errors::{PipelineError, UnknownAlgorithm};
use crate::graph::Graph;
use crate::observability::messages::algorithm::UnknownAlgorithmRequested;
use crate::observability::messages::pipeline::{
    JobAborted, JobCompleted, JobSubmitted, PipelineShutdown, StageCompleted, StageFailed,
    StageStarted, WorkerStarted, WorkerStopped,
};
use crate::observability::messages::StructuredLog;
use crate::traits::Algorithm;

/// Stage names in execution order. Each is also the registry name of the
/// algorithm the stage runs.
pub const STAGES: [&str; 4] = ["MST", "MAXFLOW", "HAMILTON", "MAXCLIQUE"];

const SINK: &str = "sink";
const ENTRY: &str = "entry";

type JobQueue = BlockingQueue<JobHandle>;

/// Point-in-time counters for the console `status` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PipelineStats {
    pub submitted: u64,
    pub completed: u64,
    pub running: bool,
}

#[derive(Default)]
struct Counters {
    submitted: AtomicU64,
    completed: AtomicU64,
}

/// Everything a worker thread needs, handed over at spawn time.
struct StageContext {
    name: &'static str,
    unit: Option<Box<dyn Algorithm>>,
    input: Arc<JobQueue>,
    output: Arc<JobQueue>,
    running: Arc<AtomicBool>,
}

pub struct Pipeline {
    /// `entry, q_mst, q_maxflow, q_ham, q_clique`
    queues: Vec<Arc<JobQueue>>,
    running: Arc<AtomicBool>,
    counters: Arc<Counters>,
    workers: Mutex<Vec<JoinHandle<()>>>,
}

impl Pipeline {
    /// Pipeline over the built-in algorithm units.
    pub fn new() -> Self {
        Self::with_registry(&AlgorithmRegistry::with_builtins())
    }

    /// Starts the five workers. Each stage resolves its unit from `registry`
    /// once; a missing name makes that stage answer every job with
    /// `ERR UNKNOWN ALGORITHM <name>`.
    pub fn with_registry(registry: &AlgorithmRegistry) -> Self {
        let queues: Vec<Arc<JobQueue>> = (0..=STAGES.len())
            .map(|_| Arc::new(BlockingQueue::new()))
            .collect();
        let running = Arc::new(AtomicBool::new(true));
        let counters = Arc::new(Counters::default());

        let mut workers = Vec::with_capacity(STAGES.len() + 1);
        for (index, name) in STAGES.into_iter().enumerate() {
            let unit = registry.create(name);
            if unit.is_none() {
                UnknownAlgorithmRequested { name, context: "stage" }.log();
            }
            let context = StageContext {
                name,
                unit,
                input: Arc::clone(&queues[index]),
                output: Arc::clone(&queues[index + 1]),
                running: Arc::clone(&running),
            };
            workers.push(thread::spawn(move || stage_worker(context)));
        }

        let sink_input = Arc::clone(&queues[STAGES.len()]);
        let sink_running = Arc::clone(&running);
        let sink_counters = Arc::clone(&counters);
        workers.push(thread::spawn(move || {
            sink_worker(&sink_input, &sink_running, &sink_counters)
        }));

        Self {
            queues,
            running,
            counters,
            workers: Mutex::new(workers),
        }
    }

    /// The process-wide pipeline, started on first access.
    pub fn global() -> Arc<Pipeline> {
        static GLOBAL: OnceLock<Arc<Pipeline>> = OnceLock::new();
        Arc::clone(GLOBAL.get_or_init(|| Arc::new(Pipeline::new())))
    }

    /// Pushes `job` onto the entry queue without blocking.
    ///
    /// `Err(ShutDown)` when shutdown has begun. A job that races with
    /// shutdown can still be accepted here and is then aborted between
    /// stages.
    pub fn submit(&self, job: JobHandle) -> Result<(), PipelineError> {
        if !self.is_running() {
            return Err(PipelineError::ShutDown);
        }
        let job_id = job.id();
        let vertex_count = job.graph().vertex_count();
        if !self.queues[0].push(job) {
            return Err(PipelineError::ShutDown);
        }
        self.counters.submitted.fetch_add(1, Ordering::Relaxed);
        JobSubmitted { job_id, vertex_count }.log();
        Ok(())
    }

    /// Submits a snapshot of `graph` and waits for the concatenated stage
    /// results. `None` waits without a deadline; a job aborted by shutdown
    /// returns `Err(ShutDown)` either way.
    pub fn run_job(
        &self,
        graph: &Graph,
        timeout: Option<Duration>,
    ) -> Result<String, PipelineError> {
        let job = Job::new(graph);
        self.submit(Arc::clone(&job))?;
        let result = match timeout {
            Some(timeout) => job.wait_timeout(timeout).ok_or(PipelineError::Timeout {
                job_id: job.id(),
                timeout,
            })?,
            None => job.wait(),
        };
        if job.is_aborted() {
            return Err(PipelineError::ShutDown);
        }
        Ok(result)
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    pub fn stats(&self) -> PipelineStats {
        PipelineStats {
            submitted: self.counters.submitted.load(Ordering::Relaxed),
            completed: self.counters.completed.load(Ordering::Relaxed),
            running: self.is_running(),
        }
    }

    /// Stops accepting jobs, closes every queue, joins the workers and
    /// settles every job left behind. Safe to call more than once.
    pub fn shutdown(&self) {
        let was_running = self.running.swap(false, Ordering::AcqRel);
        for queue in &self.queues {
            queue.close();
        }

        let workers = {
            let mut workers = self.workers.lock().unwrap_or_else(PoisonError::into_inner);
            std::mem::take(&mut *workers)
        };
        let workers_joined = workers.len();
        for worker in workers {
            // Stage panics are caught inside the worker.
            let _ = worker.join();
        }

        self.settle_leftovers();

        if was_running {
            let stats = self.stats();
            PipelineShutdown {
                workers_joined,
                jobs_submitted: stats.submitted,
                jobs_completed: stats.completed,
            }
            .log();
        }
    }

    /// Empties the closed queues once no worker is left to pop them.
    fn settle_leftovers(&self) {
        let (sink_queue, stage_queues) = match self.queues.split_last() {
            Some(split) => split,
            None => return,
        };

        for (index, queue) in stage_queues.iter().enumerate() {
            let after = index.checked_sub(1).map_or(ENTRY, |stage| STAGES[stage]);
            while let Some(job) = queue.try_pop() {
                if job.abort() {
                    JobAborted { stage: after, job_id: job.id() }.log();
                }
            }
        }

        while let Some(job) = sink_queue.try_pop() {
            self.counters.completed.fetch_add(1, Ordering::Relaxed);
            job.mark_completed();
            JobCompleted { job_id: job.id() }.log();
        }
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Pipeline {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn stage_worker(context: StageContext) {
    let StageContext { name, unit, input, output, running } = context;
    WorkerStarted { worker: name }.log();

    let mut jobs_processed = 0u64;
    while running.load(Ordering::Acquire) {
        let Some(job) = input.pop() else { break };
        let job_id = job.id();
        let start_msg = StageStarted { stage: name, job_id };
        let span = start_msg.span("stage_execution");
        let _guard = span.enter();
        start_msg.log();

        let started = Instant::now();
        let result = match &unit {
            Some(unit) => run_guarded(name, job_id, unit.as_ref(), job.graph()),
            None => format!("{}\n", UnknownAlgorithm(name.to_string())),
        };
        job.append_result(&result);
        jobs_processed += 1;

        StageCompleted {
            stage: name,
            job_id,
            duration: started.elapsed(),
        }
        .log();

        if !output.push(Arc::clone(&job)) && job.abort() {
            JobAborted { stage: name, job_id }.log();
        }
    }

    WorkerStopped { worker: name, jobs_processed }.log();
}

/// Runs one unit, turning a panic into an `ERR STAGE_FAILED` line so the
/// worker survives for the next job.
fn run_guarded(stage: &str, job_id: u64, unit: &dyn Algorithm, graph: &Graph) -> String {
    match panic::catch_unwind(AssertUnwindSafe(|| unit.run(graph))) {
        Ok(text) => text,
        Err(payload) => {
            StageFailed {
                stage,
                job_id,
                reason: &panic_reason(payload.as_ref()),
            }
            .log();
            format!("ERR STAGE_FAILED {}\n", stage)
        }
    }
}

fn panic_reason(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

fn sink_worker(input: &JobQueue, running: &AtomicBool, counters: &Counters) {
    WorkerStarted { worker: SINK }.log();

    let mut jobs_processed = 0u64;
    while running.load(Ordering::Acquire) {
        let Some(job) = input.pop() else { break };
        counters.completed.fetch_add(1, Ordering::Relaxed);
        job.mark_completed();
        jobs_processed += 1;
        JobCompleted { job_id: job.id() }.log();
    }

    WorkerStopped { worker: SINK, jobs_processed }.log();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panic_reason_extracts_messages() {
        let static_payload: Box<dyn Any + Send> = Box::new("boom");
        assert_eq!(panic_reason(static_payload.as_ref()), "boom");

        let owned_payload: Box<dyn Any + Send> = Box::new(String::from("bang"));
        assert_eq!(panic_reason(owned_payload.as_ref()), "bang");

        let opaque_payload: Box<dyn Any + Send> = Box::new(42u8);
        assert_eq!(panic_reason(opaque_payload.as_ref()), "unknown panic");
    }

    #[test]
    fn test_stats_track_submissions_and_completions() {
        let pipeline = Pipeline::new();
        let graph = Graph::new(2).unwrap();
        let job = Job::new(&graph);

        pipeline.submit(Arc::clone(&job)).unwrap();
        job.wait_timeout(Duration::from_secs(10)).unwrap();

        let stats = pipeline.stats();
        assert_eq!(stats.submitted, 1);
        assert_eq!(stats.completed, 1);
        assert!(stats.running);
    }

    #[test]
    fn test_shutdown_is_idempotent() {
        let pipeline = Pipeline::new();
        pipeline.shutdown();
        pipeline.shutdown();
        assert!(!pipeline.stats().running);
        assert!(pipeline.workers.lock().unwrap().is_empty());
    }

    /// A pipeline with open queues and no workers, so jobs stay wherever a
    /// test puts them.
    fn idle_pipeline() -> Pipeline {
        Pipeline {
            queues: (0..=STAGES.len()).map(|_| Arc::new(BlockingQueue::new())).collect(),
            running: Arc::new(AtomicBool::new(true)),
            counters: Arc::new(Counters::default()),
            workers: Mutex::new(Vec::new()),
        }
    }

    #[test]
    fn test_shutdown_settles_jobs_left_in_queues() {
        let pipeline = idle_pipeline();
        let graph = Graph::new(1).unwrap();
        let fresh = Job::new(&graph);
        let halfway = Job::new(&graph);
        let finished = Job::new(&graph);
        halfway.append_result("OK MST WEIGHT: 0\n");
        finished.append_result("OK ALL STAGES\n");
        assert!(pipeline.queues[0].push(Arc::clone(&fresh)));
        assert!(pipeline.queues[2].push(Arc::clone(&halfway)));
        assert!(pipeline.queues[STAGES.len()].push(Arc::clone(&finished)));

        pipeline.shutdown();

        assert_eq!(fresh.wait(), "ERR SHUTTING_DOWN\n");
        assert_eq!(halfway.wait(), "OK MST WEIGHT: 0\nERR SHUTTING_DOWN\n");
        assert_eq!(finished.wait(), "OK ALL STAGES\n");
        assert!(fresh.is_aborted() && halfway.is_aborted());
        assert!(!finished.is_aborted());
        assert_eq!(pipeline.stats().completed, 1);
        assert!(pipeline.queues.iter().all(|queue| queue.is_empty()));
    }

    #[test]
    fn test_stats_serialize_for_status_output() {
        let stats = PipelineStats {
            submitted: 3,
            completed: 2,
            running: true,
        };
        let json = serde_json::to_string(&stats).unwrap();
        assert_eq!(json, r#"{"submitted":3,"completed":2,"running":true}"#);
    }
}
