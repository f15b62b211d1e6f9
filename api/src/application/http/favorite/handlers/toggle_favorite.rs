use axum::extract::{Path, State};
use dinesure_core::domain::favorite::{ports::FavoriteService, value_objects::FavoriteInput};
use uuid::Uuid;

use super::FavoriteStatusResponse;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    post,
    path = "/users/{user_id}/restaurants/{restaurant_id}",
    tag = "favorite",
    summary = "Toggle favorite",
    description = "Adds the restaurant to the user's favorites, or removes it if already there. Returns the new state.",
    params(
        ("user_id" = Uuid, Path, description = "User ID"),
        ("restaurant_id" = Uuid, Path, description = "Restaurant ID"),
    ),
    responses(
        (status = 200, body = FavoriteStatusResponse),
        (status = 404, description = "Restaurant not found")
    )
)]
pub async fn toggle_favorite(
    Path((user_id, restaurant_id)): Path<(Uuid, Uuid)>,
    State(state): State<AppState>,
) -> Result<Response<FavoriteStatusResponse>, ApiError> {
    let is_favorite = state
        .service
        .toggle_favorite(FavoriteInput {
            user_id,
            restaurant_id,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(FavoriteStatusResponse { is_favorite }))
}
