use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormStateError {
    /// An element was required but absent (caller bug, not recoverable)
    #[error("element missing at tree depth {depth}")]
    MissingElement { depth: usize },

    /// Two controls share a name and the capture policy rejects that
    #[error("duplicate control name '{name}' in captured page")]
    DuplicateControlName { name: String },

    #[error("failed to read state file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write state file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// State file exists but is not a valid document
    #[error("malformed state file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to serialize application state: {0}")]
    Serialize(#[source] serde_json::Error),
}
