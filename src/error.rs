//! Error types for backend requests

use thiserror::Error;

/// Failure of a single request against the search backend
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP error! status: {status} ({url})")]
    Status { status: u16, url: String },

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid backend URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Request task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl ClientError {
    /// HTTP status code, if the backend answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let err = ClientError::Status {
            status: 500,
            url: "http://localhost:8001/api/search".to_string(),
        };
        assert_eq!(err.status(), Some(500));
        assert!(err.to_string().contains("status: 500"));
    }

    #[test]
    fn test_decode_error_has_no_status() {
        let err: ClientError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert_eq!(err.status(), None);
    }
}
