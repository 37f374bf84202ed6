use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while retrieving schema records. All of them abort the run.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} responded with {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("invalid record in {origin} at line {line}")]
    Decode {
        origin: String,
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid authorization header value")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),
}
