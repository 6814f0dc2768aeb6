//! Fatal error kinds for the aggregation pipeline.
//!
//! Parse failures are not represented here: a malformed observation is
//! recovered inside the worker that saw it (see [`crate::parser::ParseError`]).
//! Everything in this enum terminates the run.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    /// Invalid worker topology. Raised before any input is read.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// The input file is missing or unreadable. Raised before any dispatch.
    #[error("failed to read input {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A worker crashed or failed to respond. The whole run aborts; a partial
    /// aggregate is incomplete, not a best-available answer.
    #[error("worker {worker} failed: {reason}")]
    Worker { worker: usize, reason: String },
}
