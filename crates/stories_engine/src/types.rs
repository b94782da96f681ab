use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct StoreError {
    pub kind: StoreFailureKind,
    pub message: String,
}

impl StoreError {
    pub fn new(kind: StoreFailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind == StoreFailureKind::NotFound
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreFailureKind {
    InvalidUrl,
    NotFound,
    HttpStatus(u16),
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    Decode,
    TaskAborted,
    Network,
}

impl fmt::Display for StoreFailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreFailureKind::InvalidUrl => write!(f, "invalid url"),
            StoreFailureKind::NotFound => write!(f, "not found"),
            StoreFailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            StoreFailureKind::Timeout => write!(f, "timeout"),
            StoreFailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            StoreFailureKind::Decode => write!(f, "malformed payload"),
            StoreFailureKind::TaskAborted => write!(f, "fetch task aborted"),
            StoreFailureKind::Network => write!(f, "network error"),
        }
    }
}
