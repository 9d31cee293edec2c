// ABOUTME: Error type for API client calls.
// ABOUTME: Splits transport-level fetch failures from server-reported API errors.

use thiserror::Error;

/// Errors returned by the API client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Missing or invalid client configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// The request never produced a usable response: connection failures,
    /// timeouts, or a body that did not match the expected envelope.
    #[error("fetch error: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The server answered with a non-success status and a message body.
    #[error("api error ({status}): {message}")]
    Api { status: u16, message: String },
}
