use std::time::Duration;
use thiserror::Error;

/// Failure of a call to one of the exchange endpoints.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("request timed out after {}ms", .0.as_millis())]
    Timeout(Duration),

    /// Non-2xx status. `message` is the server's `error` field, if it sent one.
    #[error("server responded with status {status}")]
    Rejected { status: u16, message: Option<String> },

    #[error("network error: {0}")]
    Transport(String),

    #[error("malformed response: {0}")]
    Malformed(String),
}

impl ApiError {
    /// The error text supplied by the server, verbatim.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Rejected {
                message: Some(message),
                ..
            } => Some(message.as_str()),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Malformed(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}
