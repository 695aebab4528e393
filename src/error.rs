//! Error types for obmenu.

use std::path::PathBuf;
use thiserror::Error;

pub type MenuResult<T> = Result<T, MenuError>;

#[derive(Error, Debug)]
pub enum MenuError {
    /// The output sink refused a write while rendering.
    #[error("failed to write menu output: {0}")]
    Write(#[from] std::io::Error),

    /// A menu description file could not be read.
    #[error("failed to read menu description {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A menu description is not valid JSON or has an unknown entry type.
    #[error("invalid menu description: {0}")]
    Parse(#[from] serde_json::Error),
}
