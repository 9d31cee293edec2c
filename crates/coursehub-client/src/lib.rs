// ABOUTME: Typed client for the coursehub REST API.
// ABOUTME: Attaches bearer tokens, unwraps the response envelope, and raises notifications.

pub mod client;
pub mod error;
pub mod notify;
pub mod token;

pub use client::{ApiClient, ApiClientBuilder};
pub use error::ClientError;
pub use notify::{LogNotifier, Notifier};
pub use token::{StaticToken, TokenSource};
