// ABOUTME: User update handler. Users live at the identity provider, not in our store.
// ABOUTME: The handler forwards the partial update and returns the provider's record.

use axum::Json;
use axum::extract::{Path, State};
use coursehub_core::{Envelope, UserRecord, UserUpdate};

use crate::app_state::SharedState;
use crate::error::ApiError;

/// PUT /user/clerk/{user_id} - Forward a partial user update to the identity
/// provider and return the updated record.
pub async fn update_user(
    State(state): State<SharedState>,
    Path(user_id): Path<String>,
    Json(update): Json<UserUpdate>,
) -> Result<Json<Envelope<UserRecord>>, ApiError> {
    let user = state.identity.update_user(&user_id, &update).await?;
    Ok(Json(Envelope::new("User updated successfully", user)))
}
