use axum::extract::{Path, State};
use dinesure_core::domain::favorite::{ports::FavoriteService, value_objects::FavoriteInput};
use uuid::Uuid;

use super::FavoriteStatusResponse;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/users/{user_id}/restaurants/{restaurant_id}",
    tag = "favorite",
    summary = "Is favorite",
    params(
        ("user_id" = Uuid, Path, description = "User ID"),
        ("restaurant_id" = Uuid, Path, description = "Restaurant ID"),
    ),
    responses(
        (status = 200, body = FavoriteStatusResponse)
    )
)]
pub async fn get_favorite_status(
    Path((user_id, restaurant_id)): Path<(Uuid, Uuid)>,
    State(state): State<AppState>,
) -> Result<Response<FavoriteStatusResponse>, ApiError> {
    let is_favorite = state
        .service
        .is_favorite(FavoriteInput {
            user_id,
            restaurant_id,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(FavoriteStatusResponse { is_favorite }))
}
