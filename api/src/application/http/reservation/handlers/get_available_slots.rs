use axum::extract::{Path, Query, State};
use dinesure_core::domain::reservation::{
    ports::ReservationService,
    value_objects::{GetTimeSlotsInput, TimeSlot},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::DayQuery;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AvailableSlotsResponse {
    pub data: Vec<TimeSlot>,
}

#[utoipa::path(
    get,
    path = "/restaurants/{restaurant_id}/slots",
    tag = "reservation",
    summary = "Get available time slots",
    description = "Bookable slots of a restaurant for a day, with the number of overlapping reservations. Past slots of today are omitted.",
    params(
        ("restaurant_id" = Uuid, Path, description = "Restaurant ID"),
        DayQuery
    ),
    responses(
        (status = 200, body = AvailableSlotsResponse),
        (status = 404, description = "Restaurant not found")
    )
)]
pub async fn get_available_slots(
    Path(restaurant_id): Path<Uuid>,
    Query(query): Query<DayQuery>,
    State(state): State<AppState>,
) -> Result<Response<AvailableSlotsResponse>, ApiError> {
    let slots = state
        .service
        .get_available_time_slots(GetTimeSlotsInput {
            restaurant_id,
            date: query.date,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AvailableSlotsResponse { data: slots }))
}
