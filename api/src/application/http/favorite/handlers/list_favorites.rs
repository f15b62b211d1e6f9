use axum::extract::{Path, State};
use dinesure_core::domain::{favorite::ports::FavoriteService, restaurant::entities::Restaurant};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ListFavoritesResponse {
    pub data: Vec<Restaurant>,
}

#[utoipa::path(
    get,
    path = "/users/{user_id}",
    tag = "favorite",
    summary = "List favorite restaurants",
    description = "Restaurants the user marked as favorite, most recently added first.",
    params(
        ("user_id" = Uuid, Path, description = "User ID"),
    ),
    responses(
        (status = 200, body = ListFavoritesResponse)
    )
)]
pub async fn list_favorites(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<ListFavoritesResponse>, ApiError> {
    let restaurants = state
        .service
        .list_favorites(user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ListFavoritesResponse { data: restaurants }))
}
