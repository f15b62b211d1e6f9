use axum::extract::{Path, State};
use dinesure_core::domain::user::{ports::UserService, value_objects::UpdateProfileInput};
use uuid::Uuid;

use super::UserResponse;
use crate::application::http::{
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
    user::validators::UpdateProfileValidator,
};

#[utoipa::path(
    put,
    path = "/{user_id}/profile",
    tag = "user",
    summary = "Update dietary profile",
    description = "Replaces the user's dietary, allergy and health profile.",
    params(
        ("user_id" = Uuid, Path, description = "User ID"),
    ),
    request_body = UpdateProfileValidator,
    responses(
        (status = 200, body = UserResponse),
        (status = 400, description = "Unknown dietary type or allergen"),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_profile(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpdateProfileValidator>,
) -> Result<Response<UserResponse>, ApiError> {
    let profile = payload.profile.into_profile()?;

    let user = state
        .service
        .update_profile(UpdateProfileInput { user_id, profile })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UserResponse { data: user }))
}
