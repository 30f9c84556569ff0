use thiserror::Error;

#[derive(Error, Debug)]
pub enum BlogError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Failure to load the remote post collection.
///
/// Network failures, non-success statuses and malformed payloads all collapse
/// into this one kind. The reason is kept for logs; users only ever see
/// [`FetchError::user_message`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Could not load posts: {reason}")]
pub struct FetchError {
    reason: String,
}

impl FetchError {
    pub const USER_MESSAGE: &'static str = "Couldn't load blogs";

    pub fn network(reason: impl std::fmt::Display) -> Self {
        Self {
            reason: format!("network failure: {}", reason),
        }
    }

    pub fn status(code: u16) -> Self {
        Self {
            reason: format!("unexpected HTTP status {}", code),
        }
    }

    pub fn malformed(reason: impl std::fmt::Display) -> Self {
        Self {
            reason: format!("malformed payload: {}", reason),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn user_message(&self) -> &'static str {
        Self::USER_MESSAGE
    }
}
