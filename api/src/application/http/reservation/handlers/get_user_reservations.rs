use axum::extract::{Path, State};
use dinesure_core::domain::reservation::ports::ReservationService;
use uuid::Uuid;

use super::ReservationsResponse;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/users/{user_id}",
    tag = "reservation",
    summary = "List user reservations",
    description = "Reservations made by a user, most recent booking time first.",
    params(
        ("user_id" = Uuid, Path, description = "User ID"),
    ),
    responses(
        (status = 200, body = ReservationsResponse)
    )
)]
pub async fn get_user_reservations(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<ReservationsResponse>, ApiError> {
    let reservations = state
        .service
        .list_user_reservations(user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ReservationsResponse { data: reservations }))
}
