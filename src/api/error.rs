//! API error contract

use std::fmt;

/// Coarse classification of an [`ApiError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Transport,
    Status,
    Decode,
    Backend,
    Build,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport => write!(f, "transport"),
            Self::Status => write!(f, "status"),
            Self::Decode => write!(f, "decode"),
            Self::Backend => write!(f, "backend"),
            Self::Build => write!(f, "build"),
        }
    }
}

/// A failed API call. Messages are kept as strings so the error can live in view state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server returned {status}: {detail}")]
    Status { status: u16, detail: String },
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("backend reported an error: {0}")]
    Backend(String),
    #[error("failed to build http client: {0}")]
    Build(String),
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Transport(_) => ErrorKind::Transport,
            Self::Status { .. } => ErrorKind::Status,
            Self::Decode(_) => ErrorKind::Decode,
            Self::Backend(_) => ErrorKind::Backend,
            Self::Build(_) => ErrorKind::Build,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::Decode(e.to_string())
        } else {
            Self::Transport(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}
