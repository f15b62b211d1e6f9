use axum::extract::State;
use dinesure_core::domain::reservation::{
    ports::ReservationService, value_objects::CreateReservationInput,
};

use super::ReservationResponse;
use crate::application::http::{
    reservation::validators::CreateReservationValidator,
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
    path = "",
    tag = "reservation",
    summary = "Create reservation",
    description = "Books a table. The reservation starts as Pending and a confirmation email is sent to the customer.",
    request_body = CreateReservationValidator,
    responses(
        (status = 201, body = ReservationResponse),
        (status = 404, description = "Restaurant not found"),
        (status = 422, description = "Invalid reservation")
    )
)]
pub async fn create_reservation(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateReservationValidator>,
) -> Result<Response<ReservationResponse>, ApiError> {
    let reservation = state
        .service
        .create_reservation(CreateReservationInput {
            user_id: payload.user_id,
            restaurant_id: payload.restaurant_id,
            date_time: payload.date_time,
            guests: payload.guests,
            special_requests: payload.special_requests.unwrap_or_default(),
            customer_name: payload.customer_name,
            customer_phone: payload.customer_phone,
            customer_email: payload.customer_email.unwrap_or_default(),
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(ReservationResponse { data: reservation }))
}
