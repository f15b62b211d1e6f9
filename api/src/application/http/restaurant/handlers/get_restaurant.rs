use axum::extract::{Path, State};
use dinesure_core::domain::restaurant::{entities::Restaurant, ports::RestaurantService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetRestaurantResponse {
    pub data: Restaurant,
}

#[utoipa::path(
    get,
    path = "/{restaurant_id}",
    tag = "restaurant",
    summary = "Get restaurant",
    params(
        ("restaurant_id" = Uuid, Path, description = "Restaurant ID"),
    ),
    responses(
        (status = 200, body = GetRestaurantResponse),
        (status = 404, description = "Restaurant not found")
    )
)]
pub async fn get_restaurant(
    Path(restaurant_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<GetRestaurantResponse>, ApiError> {
    let restaurant = state
        .service
        .get_restaurant(restaurant_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetRestaurantResponse { data: restaurant }))
}
