use axum::extract::{Path, State};
use dinesure_core::domain::favorite::ports::FavoriteService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CountFavoritesResponse {
    pub count: u64,
}

#[utoipa::path(
    get,
    path = "/restaurants/{restaurant_id}/count",
    tag = "favorite",
    summary = "Count favorites",
    description = "Number of users who marked the restaurant as favorite.",
    params(
        ("restaurant_id" = Uuid, Path, description = "Restaurant ID"),
    ),
    responses(
        (status = 200, body = CountFavoritesResponse)
    )
)]
pub async fn count_favorites(
    Path(restaurant_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<CountFavoritesResponse>, ApiError> {
    let count = state
        .service
        .count_favorites(restaurant_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(CountFavoritesResponse { count }))
}
