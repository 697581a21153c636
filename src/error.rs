use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("invalid sync job: {0}")]
    InvalidJob(String),

    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("download from {url} failed with status: {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("failed to create directory {path:?}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SyncError {
    /// Network-side failures: connect, body read, or non-2xx status.
    pub fn is_network(&self) -> bool {
        matches!(self, SyncError::Request { .. } | SyncError::Status { .. })
    }
}

#[derive(Debug, Error)]
pub enum JobSetError {
    #[error("failed to read job file {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse job file JSON")]
    Parse(#[from] serde_json::Error),

    #[error("job set is empty")]
    Empty,

    #[error("duplicate job name: {0}")]
    DuplicateName(String),

    #[error("jobs {first} and {second} both write to {path:?}")]
    DuplicateDestination {
        first: String,
        second: String,
        path: PathBuf,
    },

    #[error(transparent)]
    InvalidJob(#[from] SyncError),
}
