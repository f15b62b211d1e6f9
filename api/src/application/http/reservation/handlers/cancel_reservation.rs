use axum::extract::{Path, State};
use dinesure_core::domain::reservation::{
    ports::ReservationService, value_objects::CancelReservationInput,
};
use uuid::Uuid;

use super::ReservationResponse;
use crate::application::http::{
    reservation::validators::CancelReservationValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/{reservation_id}/cancel",
    tag = "reservation",
    summary = "Cancel reservation",
    description = "Cancels a reservation on behalf of the user who made it and emails a cancellation notice.",
    params(
        ("reservation_id" = Uuid, Path, description = "Reservation ID"),
    ),
    request_body = CancelReservationValidator,
    responses(
        (status = 200, body = ReservationResponse),
        (status = 403, description = "Reservation belongs to another user"),
        (status = 404, description = "Reservation not found")
    )
)]
pub async fn cancel_reservation(
    Path(reservation_id): Path<Uuid>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CancelReservationValidator>,
) -> Result<Response<ReservationResponse>, ApiError> {
    let reservation = state
        .service
        .cancel_reservation(CancelReservationInput {
            reservation_id,
            user_id: payload.user_id,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ReservationResponse { data: reservation }))
}
