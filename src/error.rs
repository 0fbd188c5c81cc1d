//! Error type shared by every stage of the pipeline.

use std::io;
use std::path::PathBuf;

/// Every failure is fatal; nothing in the pipeline recovers locally.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// The input file is absent or unreadable.
    #[error("cannot read input {}: {source}", .path.display())]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A line is not a parseable JSON record.
    #[error("line {line}: malformed record: {source}")]
    MalformedRecord {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// A line classified as a node or edge lacks a usable value for `field`.
    #[error("line {line}: missing field `{field}`")]
    MissingField { line: usize, field: &'static str },

    /// An environment override could not be interpreted.
    #[error("invalid {key}={value:?}: {reason}")]
    InvalidConfig {
        key: &'static str,
        value: String,
        reason: String,
    },

    /// The render payload could not be encoded.
    #[error("failed to encode render payload: {0}")]
    Render(#[source] serde_json::Error),

    /// The artifact could not be written.
    #[error("cannot write output {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, GraphError>;
