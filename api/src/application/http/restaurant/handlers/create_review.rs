use axum::extract::{Path, State};
use dinesure_core::domain::restaurant::{
    entities::RestaurantReview, ports::RestaurantService, value_objects::CreateReviewInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::{
    restaurant::validators::CreateReviewValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateReviewResponse {
    pub data: RestaurantReview,
}

#[utoipa::path(
    post,
    path = "/{restaurant_id}/reviews",
    tag = "restaurant",
    summary = "Create review",
    description = "Adds a review written by an existing user.",
    params(
        ("restaurant_id" = Uuid, Path, description = "Restaurant ID"),
    ),
    request_body = CreateReviewValidator,
    responses(
        (status = 201, body = CreateReviewResponse),
        (status = 404, description = "Restaurant or user not found"),
        (status = 422, description = "Invalid review")
    )
)]
pub async fn create_review(
    Path(restaurant_id): Path<Uuid>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateReviewValidator>,
) -> Result<Response<CreateReviewResponse>, ApiError> {
    let review = state
        .service
        .create_review(CreateReviewInput {
            restaurant_id,
            user_id: payload.user_id,
            rating: payload.rating,
            title: payload.title,
            comment: payload.comment,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateReviewResponse { data: review }))
}
