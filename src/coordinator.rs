//! Coordinator for the fan-out/fan-in aggregation run.
//!
//! Reads the input, partitions it, dispatches one task per worker, waits for
//! every worker to finish, then merges the partial aggregates sequentially
//! and ranks the result. The global aggregate is an owned local with no
//! ambient state, so repeated runs in one process are fully isolated.

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::{debug, info};

use crate::aggregate::TrafficAggregate;
use crate::error::PipelineError;
use crate::partition::partition;
use crate::ranking::{RankedReport, rank_top_n};
use crate::worker::process_partition;

#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Observation log to aggregate.
    pub input: PathBuf,
    /// Worker units of concurrency; fixed for the run's lifetime.
    pub workers: usize,
    /// Lights reported per time bucket.
    pub top_n: usize,
}

/// Runs the whole pipeline: load → partition → fan out → join → merge → rank.
///
/// # Errors
///
/// Fails with [`PipelineError::Configuration`] before touching the input if
/// the topology has no workers, [`PipelineError::Io`] if the input cannot be
/// read, and [`PipelineError::Worker`] if any worker dies — in which case the
/// whole run aborts rather than reporting a silently incomplete aggregate.
#[tracing::instrument(skip(config), fields(input = %config.input.display(), workers = config.workers))]
pub async fn run(config: &RunConfig) -> Result<RankedReport> {
    // Topology check comes first: a bad configuration fails before the input
    // file is even opened.
    if config.workers == 0 {
        return Err(PipelineError::Configuration(
            "at least one worker is required".to_string(),
        )
        .into());
    }

    let lines = load_lines(&config.input)?;
    info!(lines = lines.len(), "Input loaded");

    let ranges = partition(lines.len(), config.workers)?;

    // Fan out: each worker takes ownership of its contiguous slice.
    let mut handles = Vec::with_capacity(ranges.len());
    let mut remaining = lines.into_iter();
    for (worker, range) in ranges.into_iter().enumerate() {
        let slice: Vec<String> = remaining.by_ref().take(range.len()).collect();
        debug!(worker, lines = slice.len(), "Dispatching partition");
        handles.push(tokio::task::spawn_blocking(move || {
            process_partition(worker, slice)
        }));
    }

    // Full barrier: every worker must return before any merging starts. A
    // single dead worker aborts the run.
    let mut results = Vec::with_capacity(handles.len());
    for (worker, handle) in handles.into_iter().enumerate() {
        let result = handle.await.map_err(|e| PipelineError::Worker {
            worker,
            reason: e.to_string(),
        })?;
        results.push(result);
    }

    // Sequential merge in worker index order; each result is merged exactly
    // once. Merge commutativity makes the order irrelevant to the outcome.
    let mut global = TrafficAggregate::new();
    let mut parse_failures = 0;
    for (worker, result) in results.into_iter().enumerate() {
        debug!(
            worker,
            buckets = result.distinct_buckets,
            failures = result.parse_failures.len(),
            "Merging worker result"
        );
        parse_failures += result.parse_failures.len();
        global.merge(result.aggregate);
    }

    info!(
        buckets = global.len(),
        parse_failures, "Merge complete, ranking"
    );

    Ok(rank_top_n(&global, config.top_n))
}

/// Loads the raw observation lines, discarding blank ones.
fn load_lines(path: &Path) -> Result<Vec<String>, PipelineError> {
    let contents = std::fs::read_to_string(path).map_err(|source| PipelineError::Io {
        path: path.display().to_string(),
        source,
    })?;

    Ok(contents
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect())
}
