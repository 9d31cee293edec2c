// ABOUTME: The JSON envelope wrapping every API response body.
// ABOUTME: Success bodies are {message, data}; error bodies carry only a message.

use serde::{Deserialize, Serialize};

/// Wrapper around every successful JSON response. Clients unwrap one layer
/// and hand the inner `data` to callers; `message` feeds user notifications.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub message: String,
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data,
        }
    }
}

/// Body shape for non-2xx responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
