// ABOUTME: Bearer token authentication middleware for the user routes.
// ABOUTME: Checks Authorization headers on /user/* and delegates verification to the identity provider.

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use coursehub_core::ErrorBody;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use thiserror::Error;
use tower::{Layer, Service};

use crate::identity::SessionClaims;

/// Errors from token verification.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid or expired session token")]
    InvalidToken,

    #[error("identity provider unavailable: {0}")]
    Unavailable(String),
}

/// Something that can decide whether a bearer token names a live session.
/// Production uses the identity provider client; tests use a static token.
#[async_trait::async_trait]
pub trait TokenVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> Result<SessionClaims, AuthError>;
}

/// Verifier that accepts exactly one configured token. For tests and local
/// development without provider credentials.
pub struct StaticTokenVerifier {
    token: String,
}

impl StaticTokenVerifier {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[async_trait::async_trait]
impl TokenVerifier for StaticTokenVerifier {
    async fn verify(&self, token: &str) -> Result<SessionClaims, AuthError> {
        if token == self.token {
            Ok(SessionClaims {
                user_id: "user_local".to_string(),
            })
        } else {
            Err(AuthError::InvalidToken)
        }
    }
}

/// A tower Layer that applies bearer token authentication to user routes.
#[derive(Clone)]
pub struct AuthLayer {
    verifier: Arc<dyn TokenVerifier>,
}

impl AuthLayer {
    pub fn new(verifier: Arc<dyn TokenVerifier>) -> Self {
        Self { verifier }
    }
}

impl<S> Layer<S> for AuthLayer {
    type Service = AuthMiddleware<S>;

    fn layer(&self, inner: S) -> Self::Service {
        AuthMiddleware {
            inner,
            verifier: Arc::clone(&self.verifier),
        }
    }
}

/// The middleware service that checks bearer tokens on /user and /user/* routes.
#[derive(Clone)]
pub struct AuthMiddleware<S> {
    inner: S,
    verifier: Arc<dyn TokenVerifier>,
}

impl<S> Service<Request<Body>> for AuthMiddleware<S>
where
    S: Service<Request<Body>, Response = Response<Body>> + Clone + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let path = req.uri().path().to_string();

        // Course reads stay public; only user routes are authenticated
        if !(path == "/user" || path.starts_with("/user/")) {
            let mut inner = self.inner.clone();
            return Box::pin(async move { inner.call(req).await });
        }

        let token = req
            .headers()
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .map(|v| v.to_string());

        let verifier = Arc::clone(&self.verifier);
        let mut inner = self.inner.clone();

        Box::pin(async move {
            let Some(token) = token else {
                return Ok(unauthorized());
            };

            match verifier.verify(&token).await {
                Ok(_claims) => inner.call(req).await,
                Err(e) => {
                    tracing::warn!("token verification failed: {}", e);
                    Ok(unauthorized())
                }
            }
        })
    }
}

fn unauthorized() -> Response<Body> {
    let body = ErrorBody::new("unauthorized");
    Response::builder()
        .status(StatusCode::UNAUTHORIZED)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}
