use axum::extract::State;
use dinesure_core::domain::restaurant::{ports::RestaurantService, value_objects::ImportSummary};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ImportRestaurantsResponse {
    pub data: ImportSummary,
}

#[utoipa::path(
    post,
    path = "/import",
    tag = "restaurant",
    summary = "Import restaurants",
    description = "Fetches restaurants inside the configured bounding box from OpenStreetMap and stores the ones not already known.",
    responses(
        (status = 200, body = ImportRestaurantsResponse),
        (status = 503, description = "Overpass API unavailable or timed out"),
        (status = 502, description = "Overpass API returned an unreadable response")
    )
)]
pub async fn import_restaurants(
    State(state): State<AppState>,
) -> Result<Response<ImportRestaurantsResponse>, ApiError> {
    let summary = state
        .service
        .import_restaurants()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ImportRestaurantsResponse { data: summary }))
}
