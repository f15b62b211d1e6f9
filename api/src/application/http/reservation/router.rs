use super::handlers::cancel_reservation::{__path_cancel_reservation, cancel_reservation};
use super::handlers::create_reservation::{__path_create_reservation, create_reservation};
use super::handlers::get_available_slots::{__path_get_available_slots, get_available_slots};
use super::handlers::get_restaurant_reservations::{
    __path_get_restaurant_reservations, get_restaurant_reservations,
};
use super::handlers::get_user_reservations::{
    __path_get_user_reservations, get_user_reservations,
};
use super::handlers::update_reservation_status::{
    __path_update_reservation_status, update_reservation_status,
};
use crate::application::http::server::app_state::AppState;

use axum::{
    Router,
    routing::{get, post, put},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    create_reservation,
    get_user_reservations,
    get_restaurant_reservations,
    get_available_slots,
    update_reservation_status,
    cancel_reservation
))]
pub struct ReservationApiDoc;

pub fn reservation_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{}/reservations", root_path),
            post(create_reservation),
        )
        .route(
            &format!("{}/reservations/users/{{user_id}}", root_path),
            get(get_user_reservations),
        )
        .route(
            &format!("{}/reservations/restaurants/{{restaurant_id}}", root_path),
            get(get_restaurant_reservations),
        )
        .route(
            &format!(
                "{}/reservations/restaurants/{{restaurant_id}}/slots",
                root_path
            ),
            get(get_available_slots),
        )
        .route(
            &format!("{}/reservations/{{reservation_id}}/status", root_path),
            put(update_reservation_status),
        )
        .route(
            &format!("{}/reservations/{{reservation_id}}/cancel", root_path),
            post(cancel_reservation),
        )
}
