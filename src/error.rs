// src/error.rs

use thiserror::Error;

/// Failures raised by the reshaping pipeline and the types it hands out.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReshapeError {
    /// The payload (or its envelope) is not the sequence of records we expect.
    #[error("unexpected payload shape: {0}")]
    DataShape(String),

    /// A single record could not be decoded; callers log and skip it.
    #[error("malformed record: {0}")]
    MalformedRecord(String),

    /// A record matched more than one annual period key of the window.
    #[error("period `{period}` matched {matches} years of the window")]
    AmbiguousPeriod { period: String, matches: usize },

    #[error("invalid year window {start}..={end}")]
    InvalidWindow { start: i32, end: i32 },

    /// A session accessor was used before its lifecycle step ran.
    #[error("session not ready: {0} has not been initialised")]
    NotReady(&'static str),

    /// Menu label text that names no known city, region or metric.
    #[error("unknown label `{0}`")]
    UnknownLabel(String),
}

pub type Result<T> = std::result::Result<T, ReshapeError>;
