// ABOUTME: Source of bearer tokens for outgoing requests.
// ABOUTME: Wraps the identity provider's client-side session; None means anonymous.

use async_trait::async_trait;

/// Supplies the current session token, if any. Backed by the identity
/// provider's session object in a real client; requests without a token are
/// sent anonymously and the server decides what they may reach.
#[async_trait]
pub trait TokenSource: Send + Sync {
    async fn token(&self) -> Option<String>;
}

/// A fixed token, for tests and server-to-server callers.
pub struct StaticToken(pub String);

#[async_trait]
impl TokenSource for StaticToken {
    async fn token(&self) -> Option<String> {
        Some(self.0.clone())
    }
}
