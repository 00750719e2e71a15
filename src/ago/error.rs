use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgoError {
    #[error("no such doc")]
    DocNotFound(u64),

    #[error("file not exists: {}", .0.display())]
    SourceMissing(PathBuf),

    #[error("file name is missing or not valid UTF-8: {}", .0.display())]
    NoFileName(PathBuf),

    #[error("argument must be doc id: {0}")]
    InvalidId(String),

    #[error("failed to {action} {}: {source}", .path.display())]
    FileOp {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to add doc {}: {source}", .path.display())]
    AddDoc {
        path: PathBuf,
        #[source]
        source: Box<AgoError>,
    },

    #[error("failed to remove doc id {id}: {source}")]
    RemoveDoc {
        id: u64,
        #[source]
        source: Box<AgoError>,
    },

    #[error("document ids exhausted: next id would overflow past {0}")]
    IdsExhausted(u64),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AgoError {
    /// Wraps an `io::Error` with the operation and path it failed on.
    pub fn file_op(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AgoError::FileOp {
            action,
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, AgoError>;
