use axum::extract::{Path, State};
use dinesure_core::domain::reservation::{
    ports::ReservationService, value_objects::UpdateReservationStatusInput,
};
use uuid::Uuid;

use super::ReservationResponse;
use crate::application::http::{
    reservation::validators::UpdateReservationStatusValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    put,
    path = "/{reservation_id}/status",
    tag = "reservation",
    summary = "Update reservation status",
    params(
        ("reservation_id" = Uuid, Path, description = "Reservation ID"),
    ),
    request_body = UpdateReservationStatusValidator,
    responses(
        (status = 200, body = ReservationResponse),
        (status = 404, description = "Reservation not found")
    )
)]
pub async fn update_reservation_status(
    Path(reservation_id): Path<Uuid>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpdateReservationStatusValidator>,
) -> Result<Response<ReservationResponse>, ApiError> {
    let reservation = state
        .service
        .update_reservation_status(UpdateReservationStatusInput {
            reservation_id,
            status: payload.status,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ReservationResponse { data: reservation }))
}
