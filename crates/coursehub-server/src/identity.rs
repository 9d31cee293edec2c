// ABOUTME: HTTP client for the hosted identity provider's backend API.
// ABOUTME: Forwards user updates and session verification; nothing is stored locally.

use async_trait::async_trait;
use coursehub_core::{UserRecord, UserUpdate};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::auth::{AuthError, TokenVerifier};

/// Default base URL for the provider's backend API. Overridable for tests
/// and proxies via `with_base_url` (CLERK_API_BASE_URL in the environment).
pub const DEFAULT_API_BASE_URL: &str = "https://api.clerk.com/v1";

/// Errors from identity provider calls. Transport failures (DNS, refused
/// connection, malformed body) are distinct from provider-side rejections.
#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("identity provider request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("identity provider returned {status}: {message}")]
    Provider { status: u16, message: String },
}

/// Claims extracted from a verified session token.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionClaims {
    pub user_id: String,
}

/// Client for the provider's backend API, authenticated with the secret key.
#[derive(Clone)]
pub struct IdentityClient {
    http: reqwest::Client,
    base_url: String,
    secret_key: String,
}

impl IdentityClient {
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: DEFAULT_API_BASE_URL.to_string(),
            secret_key: secret_key.into(),
        }
    }

    /// Point the client at a different base URL (test stubs, proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Forward a partial user update to the provider and return the updated
    /// record. The provider owns the user; we never persist it.
    pub async fn update_user(
        &self,
        user_id: &str,
        update: &UserUpdate,
    ) -> Result<UserRecord, IdentityError> {
        let url = format!("{}/users/{}", self.base_url, user_id);
        let resp = self
            .http
            .patch(&url)
            .bearer_auth(&self.secret_key)
            .json(update)
            .send()
            .await?;
        Self::read_json(resp).await
    }

    /// Ask the provider whether a client-supplied session token is valid.
    pub async fn verify_session(&self, token: &str) -> Result<SessionClaims, IdentityError> {
        let url = format!("{}/sessions/verify", self.base_url);
        let resp = self
            .http
            .post(&url)
            .bearer_auth(&self.secret_key)
            .json(&serde_json::json!({ "token": token }))
            .send()
            .await?;
        Self::read_json(resp).await
    }

    async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, IdentityError> {
        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(IdentityError::Provider {
                status: status.as_u16(),
                message,
            });
        }
        Ok(resp.json::<T>().await?)
    }
}

#[async_trait]
impl TokenVerifier for IdentityClient {
    async fn verify(&self, token: &str) -> Result<SessionClaims, AuthError> {
        match self.verify_session(token).await {
            Ok(claims) => Ok(claims),
            // The provider rejecting the token means the caller is not
            // authenticated; an unreachable provider is a server-side fault.
            Err(IdentityError::Provider { .. }) => Err(AuthError::InvalidToken),
            Err(IdentityError::Transport(e)) => Err(AuthError::Unavailable(e.to_string())),
        }
    }
}
