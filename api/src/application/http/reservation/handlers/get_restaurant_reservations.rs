use axum::extract::{Path, Query, State};
use dinesure_core::domain::reservation::ports::ReservationService;
use uuid::Uuid;

use super::{DayQuery, ReservationsResponse};
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/restaurants/{restaurant_id}",
    tag = "reservation",
    summary = "List restaurant reservations for a day",
    description = "Non-cancelled reservations of a restaurant on the given day, in booking order.",
    params(
        ("restaurant_id" = Uuid, Path, description = "Restaurant ID"),
        DayQuery
    ),
    responses(
        (status = 200, body = ReservationsResponse)
    )
)]
pub async fn get_restaurant_reservations(
    Path(restaurant_id): Path<Uuid>,
    Query(query): Query<DayQuery>,
    State(state): State<AppState>,
) -> Result<Response<ReservationsResponse>, ApiError> {
    let reservations = state
        .service
        .list_restaurant_reservations(restaurant_id, query.date)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ReservationsResponse { data: reservations }))
}
