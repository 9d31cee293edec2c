// ABOUTME: The API client itself: request building, token attachment, envelope unwrapping.
// ABOUTME: One typed method per endpoint; shared send path handles errors and notifications.

use std::sync::Arc;

use coursehub_core::{Course, Envelope, ErrorBody, UserRecord, UserUpdate};
use serde::de::DeserializeOwned;

use crate::error::ClientError;
use crate::notify::{LogNotifier, Notifier};
use crate::token::TokenSource;

/// Typed client for the coursehub REST API. Every call attaches the current
/// session token (when a source is configured), unwraps the `{message, data}`
/// envelope, and routes outcomes to the notifier.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    tokens: Option<Arc<dyn TokenSource>>,
    notifier: Arc<dyn Notifier>,
}

/// Builder for ApiClient.
pub struct ApiClientBuilder {
    base_url: String,
    tokens: Option<Arc<dyn TokenSource>>,
    notifier: Arc<dyn Notifier>,
}

impl ApiClientBuilder {
    /// Attach a session token source. Without one, requests go out anonymous.
    pub fn token_source(mut self, source: Arc<dyn TokenSource>) -> Self {
        self.tokens = Some(source);
        self
    }

    /// Replace the default log-backed notifier.
    pub fn notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn build(self) -> ApiClient {
        ApiClient {
            http: reqwest::Client::new(),
            base_url: self.base_url,
            tokens: self.tokens,
            notifier: self.notifier,
        }
    }
}

impl ApiClient {
    pub fn builder(base_url: impl Into<String>) -> ApiClientBuilder {
        ApiClientBuilder {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            tokens: None,
            notifier: Arc::new(LogNotifier),
        }
    }

    /// Start a builder from the API_BASE_URL environment variable.
    pub fn from_env() -> Result<ApiClientBuilder, ClientError> {
        let base_url = std::env::var("API_BASE_URL")
            .map_err(|_| ClientError::Config("API_BASE_URL is not set".to_string()))?;
        Ok(Self::builder(base_url))
    }

    /// GET /courses - list courses, optionally filtered by category.
    pub async fn get_courses(&self, category: Option<&str>) -> Result<Vec<Course>, ClientError> {
        let mut req = self.http.get(format!("{}/courses", self.base_url));
        if let Some(category) = category {
            req = req.query(&[("category", category)]);
        }
        // Reads stay silent on success
        self.execute(req, false).await
    }

    /// GET /courses/{id} - fetch a single course.
    pub async fn get_course(&self, course_id: &str) -> Result<Course, ClientError> {
        let req = self
            .http
            .get(format!("{}/courses/{}", self.base_url, course_id));
        self.execute(req, false).await
    }

    /// PUT /user/clerk/{id} - update the signed-in user through the backend.
    pub async fn update_user(
        &self,
        user_id: &str,
        update: &UserUpdate,
    ) -> Result<UserRecord, ClientError> {
        let req = self
            .http
            .put(format!("{}/user/clerk/{}", self.base_url, user_id))
            .json(update);
        // Mutations surface the server's message as a success toast
        self.execute(req, true).await
    }

    /// Shared send path: attach token, send, classify failures, unwrap the
    /// envelope, and raise notifications.
    async fn execute<T: DeserializeOwned>(
        &self,
        mut req: reqwest::RequestBuilder,
        notify_success: bool,
    ) -> Result<T, ClientError> {
        if let Some(source) = &self.tokens {
            if let Some(token) = source.token().await {
                req = req.bearer_auth(token);
            }
        }

        let resp = match req.send().await {
            Ok(resp) => resp,
            Err(e) => {
                self.notifier.error("Unable to reach the server");
                return Err(ClientError::Fetch(e));
            }
        };

        let status = resp.status();
        if !status.is_success() {
            let message = match resp.json::<ErrorBody>().await {
                Ok(body) => body.message,
                Err(_) => format!("request failed with status {}", status.as_u16()),
            };
            self.notifier.error(&message);
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let envelope: Envelope<T> = match resp.json().await {
            Ok(envelope) => envelope,
            Err(e) => {
                self.notifier.error("Received a malformed response");
                return Err(ClientError::Fetch(e));
            }
        };

        if notify_success && !envelope.message.is_empty() {
            self.notifier.success(&envelope.message);
        }

        Ok(envelope.data)
    }
}
