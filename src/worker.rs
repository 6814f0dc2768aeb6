//! Worker-side processing of one input partition.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::aggregate::TrafficAggregate;
use crate::parser::parse_line;

/// The serializable partial result a worker hands back to the coordinator.
///
/// Ownership transfers fully with the value; the worker keeps no reference to
/// its aggregate once this is returned.
#[derive(Debug, Serialize, Deserialize)]
pub struct WorkerResult {
    pub aggregate: TrafficAggregate,
    /// Distinct buckets this worker discovered in its partition.
    pub distinct_buckets: usize,
    /// One message per malformed line that was skipped.
    pub parse_failures: Vec<String>,
}

/// Aggregates one partition of raw lines into a private [`TrafficAggregate`].
///
/// Malformed lines are warned about and collected in the result's failure
/// list; they never abort the partition. Touches no state outside its own
/// memory.
pub fn process_partition(worker: usize, lines: Vec<String>) -> WorkerResult {
    let mut aggregate = TrafficAggregate::new();
    let mut parse_failures = Vec::new();

    for line in &lines {
        match parse_line(line) {
            Ok(obs) => aggregate.record(obs),
            Err(e) => {
                warn!(worker, line = %line, error = %e, "Skipping malformed observation");
                parse_failures.push(format!("{line:?}: {e}"));
            }
        }
    }

    let distinct_buckets = aggregate.len();
    WorkerResult {
        aggregate,
        distinct_buckets,
        parse_failures,
    }
}
