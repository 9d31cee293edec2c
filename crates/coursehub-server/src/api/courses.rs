// ABOUTME: Course catalog read handlers: category-filtered listing and point reads.
// ABOUTME: Both routes are public; responses use the {message, data} envelope.

use axum::Json;
use axum::extract::{Path, Query, State};
use coursehub_core::{Course, Envelope};
use serde::Deserialize;
use ulid::Ulid;

use crate::app_state::SharedState;
use crate::error::ApiError;

/// Query parameters for the course list endpoint.
#[derive(Debug, Deserialize)]
pub struct CourseListQuery {
    pub category: Option<String>,
}

/// GET /courses - List courses, newest-first, optionally filtered by category.
pub async fn list_courses(
    State(state): State<SharedState>,
    Query(query): Query<CourseListQuery>,
) -> Result<Json<Envelope<Vec<Course>>>, ApiError> {
    // The storefront sends the literal string "all" for the unfiltered tab
    let category = query
        .category
        .as_deref()
        .filter(|c| !c.is_empty() && *c != "all");

    let store = state.store.lock().await;
    let courses = store.list_courses(category)?;

    Ok(Json(Envelope::new(
        "Courses retrieved successfully",
        courses,
    )))
}

/// GET /courses/{course_id} - Fetch a single course by id.
pub async fn get_course(
    State(state): State<SharedState>,
    Path(course_id): Path<String>,
) -> Result<Json<Envelope<Course>>, ApiError> {
    let course_id = course_id
        .parse::<Ulid>()
        .map_err(|_| ApiError::BadRequest("invalid course id".to_string()))?;

    let store = state.store.lock().await;
    match store.get_course(&course_id)? {
        Some(course) => Ok(Json(Envelope::new("Course retrieved successfully", course))),
        None => Err(ApiError::NotFound("course not found".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_state::AppState;
    use crate::identity::IdentityClient;
    use crate::routes::create_router;
    use axum::body::Body;
    use coursehub_core::CourseLevel;
    use coursehub_store::CourseStore;
    use http::Request;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_state() -> SharedState {
        let dir = tempfile::TempDir::new().unwrap();
        let store = CourseStore::open(&dir.keep().join("courses.db")).unwrap();
        Arc::new(AppState::new(store, IdentityClient::new("sk_test_unused")))
    }

    fn make_course(title: &str, category: &str) -> Course {
        Course::new(
            "user_teacher".to_string(),
            "Test Teacher".to_string(),
            title.to_string(),
            category.to_string(),
            CourseLevel::Beginner,
        )
    }

    async fn seed(state: &SharedState, course: &Course) {
        state.store.lock().await.put_course(course).unwrap();
    }

    async fn json_body(resp: axum::response::Response) -> serde_json::Value {
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn list_returns_enveloped_courses() {
        let state = test_state();
        seed(&state, &make_course("Rust Basics", "programming")).await;
        seed(&state, &make_course("Color Theory", "design")).await;

        let app = create_router(Arc::clone(&state), None);
        let resp = app
            .oneshot(Request::get("/courses").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(resp.status(), 200);
        let json = json_body(resp).await;
        assert_eq!(json["message"], "Courses retrieved successfully");
        assert_eq!(json["data"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn list_filters_by_category() {
        let state = test_state();
        seed(&state, &make_course("Rust Basics", "programming")).await;
        seed(&state, &make_course("Color Theory", "design")).await;

        let app = create_router(Arc::clone(&state), None);
        let resp = app
            .oneshot(
                Request::get("/courses?category=design")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let json = json_body(resp).await;
        let data = json["data"].as_array().unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(data[0]["title"], "Color Theory");
    }

    #[tokio::test]
    async fn list_treats_all_as_unfiltered() {
        let state = test_state();
        seed(&state, &make_course("Rust Basics", "programming")).await;
        seed(&state, &make_course("Color Theory", "design")).await;

        let app = create_router(Arc::clone(&state), None);
        let resp = app
            .oneshot(
                Request::get("/courses?category=all")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let json = json_body(resp).await;
        assert_eq!(json["data"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn get_returns_course_by_id() {
        let state = test_state();
        let course = make_course("Rust Basics", "programming");
        seed(&state, &course).await;

        let app = create_router(Arc::clone(&state), None);
        let resp = app
            .oneshot(
                Request::get(&format!("/courses/{}", course.course_id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), 200);
        let json = json_body(resp).await;
        assert_eq!(json["message"], "Course retrieved successfully");
        assert_eq!(json["data"]["title"], "Rust Basics");
        assert_eq!(json["data"]["course_id"], course.course_id.to_string());
    }

    #[tokio::test]
    async fn get_unknown_id_returns_404() {
        let state = test_state();

        let app = create_router(Arc::clone(&state), None);
        let resp = app
            .oneshot(
                Request::get(&format!("/courses/{}", Ulid::new()))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), 404);
        let json = json_body(resp).await;
        assert_eq!(json["message"], "course not found");
    }

    #[tokio::test]
    async fn get_malformed_id_returns_400() {
        let state = test_state();

        let app = create_router(Arc::clone(&state), None);
        let resp = app
            .oneshot(
                Request::get("/courses/not-a-ulid")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), 400);
        let json = json_body(resp).await;
        assert_eq!(json["message"], "invalid course id");
    }
}
