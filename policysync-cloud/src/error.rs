//! Policy sync error types.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for policy sync operations.
pub type SyncResult<T> = Result<T, SyncError>;

/// Errors that can occur while resolving or uploading policies.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("malformed policy listing: {0}")]
    MalformedResponse(String),

    #[error("failed to look up policy {name}: {source}")]
    Lookup {
        name: String,
        #[source]
        source: Box<SyncError>,
    },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl SyncError {
    /// Wraps an error raised while listing policies for `name`.
    pub fn lookup(name: impl Into<String>, source: SyncError) -> Self {
        Self::Lookup {
            name: name.into(),
            source: Box::new(source),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// HTTP status of a rejected request, looking through lookup context.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Lookup { source, .. } => source.status(),
            _ => None,
        }
    }
}
