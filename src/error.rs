use reqwest::StatusCode;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while fetching a page or downloading its media
#[derive(Debug, Error)]
pub enum GrabError {
    /// The URL could not be turned into a request
    #[error("invalid URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Transport failure while executing a request
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with something other than 200
    #[error("received non-200 response from {url}: {status}")]
    HttpStatus { url: String, status: StatusCode },

    /// The destination file could not be opened for writing
    #[error("failed to create {}: {source}", .path.display())]
    FileCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Streaming the response body to disk failed
    #[error("failed to write {}: {source}", .path.display())]
    Copy {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("failed to read config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

impl GrabError {
    /// True for failures that happened before or while talking to the server
    pub fn is_request_error(&self) -> bool {
        matches!(self, GrabError::InvalidUrl { .. } | GrabError::Request { .. })
    }

    /// The HTTP status carried by a status error
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            GrabError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, GrabError>;
