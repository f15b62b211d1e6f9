use axum::extract::State;
use dinesure_core::domain::user::{ports::UserService, value_objects::RegisterUserInput};

use super::UserResponse;
use crate::application::http::{
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
    user::validators::RegisterUserValidator,
};

#[utoipa::path(
    post,
    path = "",
    tag = "user",
    summary = "Register user",
    description = "Creates a user with a dietary profile. Username and email must be unique.",
    request_body = RegisterUserValidator,
    responses(
        (status = 201, body = UserResponse),
        (status = 409, description = "Username or email already taken"),
        (status = 422, description = "Invalid registration")
    )
)]
pub async fn register_user(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<RegisterUserValidator>,
) -> Result<Response<UserResponse>, ApiError> {
    let profile = payload.profile.into_profile()?;

    let user = state
        .service
        .register_user(RegisterUserInput {
            username: payload.username,
            email: payload.email,
            birth_year: payload.birth_year,
            profile,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(UserResponse { data: user }))
}
