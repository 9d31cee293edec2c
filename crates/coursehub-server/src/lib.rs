// ABOUTME: HTTP server for coursehub, exposing the course catalog REST API.
// ABOUTME: Uses Axum with a shared course store and delegated identity-provider auth.

pub mod api;
pub mod app_state;
pub mod auth;
pub mod config;
pub mod error;
pub mod identity;
pub mod routes;

pub use app_state::{AppState, SharedState};
pub use auth::{AuthLayer, StaticTokenVerifier, TokenVerifier};
pub use config::{ConfigError, ServerConfig};
pub use error::ApiError;
pub use identity::{IdentityClient, IdentityError, SessionClaims};
pub use routes::create_router;
