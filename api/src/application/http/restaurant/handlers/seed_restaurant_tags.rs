use axum::extract::State;
use dinesure_core::domain::restaurant::ports::RestaurantService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SeedRestaurantTagsResponse {
    pub updated: usize,
}

#[utoipa::path(
    post,
    path = "/seed-tags",
    tag = "restaurant",
    summary = "Seed dietary tags",
    description = "Assigns deterministic dietary types and allergen-free options to restaurants that have none.",
    responses(
        (status = 200, body = SeedRestaurantTagsResponse)
    )
)]
pub async fn seed_restaurant_tags(
    State(state): State<AppState>,
) -> Result<Response<SeedRestaurantTagsResponse>, ApiError> {
    let updated = state
        .service
        .seed_restaurant_tags()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SeedRestaurantTagsResponse { updated }))
}
