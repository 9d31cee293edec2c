// ABOUTME: Route definitions and middleware assembly for the coursehub HTTP API.
// ABOUTME: Mounts course and user routes with trace, CORS, and security-header layers.

use axum::Router;
use axum::http::header::{HeaderName, HeaderValue, X_CONTENT_TYPE_OPTIONS};
use axum::routing::{get, put};
use tower_http::cors::CorsLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::app_state::SharedState;
use crate::auth::AuthLayer;

/// Build the complete Axum router with all routes, middleware, and shared
/// state. When `auth` is None the user routes are left unauthenticated
/// (local development without provider credentials).
pub fn create_router(state: SharedState, auth: Option<AuthLayer>) -> Router {
    let mut router = Router::new()
        .route("/", get(root))
        .route("/courses", get(api::courses::list_courses))
        .route("/courses/{course_id}", get(api::courses::get_course))
        .route("/user/clerk/{user_id}", put(api::users::update_user))
        .with_state(state);

    if let Some(auth) = auth {
        router = router.layer(auth);
    }

    router
        .layer(SetResponseHeaderLayer::overriding(
            X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("cross-origin-resource-policy"),
            HeaderValue::from_static("cross-origin"),
        ))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Liveness greeting at the root, outside the API envelope.
async fn root() -> &'static str {
    "coursehub api is running"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_state::AppState;
    use crate::identity::IdentityClient;
    use axum::body::Body;
    use coursehub_store::CourseStore;
    use http::Request;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_state() -> SharedState {
        let dir = tempfile::TempDir::new().unwrap();
        let store = CourseStore::open(&dir.keep().join("courses.db")).unwrap();
        Arc::new(AppState::new(store, IdentityClient::new("sk_test_unused")))
    }

    #[tokio::test]
    async fn root_returns_greeting() {
        let app = create_router(test_state(), None);
        let resp = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(resp.status(), 200);

        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"coursehub api is running");
    }

    #[tokio::test]
    async fn responses_carry_security_headers() {
        let app = create_router(test_state(), None);
        let resp = app
            .oneshot(Request::get("/courses").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(
            resp.headers().get("x-content-type-options").unwrap(),
            "nosniff"
        );
        assert_eq!(
            resp.headers()
                .get("cross-origin-resource-policy")
                .unwrap(),
            "cross-origin"
        );
    }

    #[tokio::test]
    async fn unknown_route_returns_404() {
        let app = create_router(test_state(), None);
        let resp = app
            .oneshot(Request::get("/enrollments").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(resp.status(), 404);
    }
}
