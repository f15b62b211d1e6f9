use axum::extract::{Path, State};
use dinesure_core::domain::restaurant::{entities::RestaurantReview, ports::RestaurantService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetReviewsResponse {
    pub data: Vec<RestaurantReview>,
}

#[utoipa::path(
    get,
    path = "/{restaurant_id}/reviews",
    tag = "restaurant",
    summary = "List reviews",
    description = "Reviews of a restaurant, newest first.",
    params(
        ("restaurant_id" = Uuid, Path, description = "Restaurant ID"),
    ),
    responses(
        (status = 200, body = GetReviewsResponse),
        (status = 404, description = "Restaurant not found")
    )
)]
pub async fn get_reviews(
    Path(restaurant_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<GetReviewsResponse>, ApiError> {
    let reviews = state
        .service
        .list_reviews(restaurant_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetReviewsResponse { data: reviews }))
}
