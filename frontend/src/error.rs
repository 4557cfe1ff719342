use thiserror::Error;

/// Failure to complete an HTTP exchange at all (as opposed to a non-2xx
/// response, which is a completed exchange).
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("{0}")]
    Network(String),
    #[error("The request was aborted")]
    Aborted,
    #[error("Failed to build request: {0}")]
    InvalidRequest(String),
    #[error("{message}")]
    Status { message: String, status: u16 },
}

impl TransportError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Local storage is not available")]
    Unavailable,
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Storage quota exceeded")]
    QuotaExceeded,
    #[error("Storage backend error: {0}")]
    Backend(String),
}
