pub mod cancel_reservation;
pub mod create_reservation;
pub mod get_available_slots;
pub mod get_restaurant_reservations;
pub mod get_user_reservations;
pub mod update_reservation_status;

use chrono::NaiveDate;
use dinesure_core::domain::reservation::entities::Reservation;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ReservationResponse {
    pub data: Reservation,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ReservationsResponse {
    pub data: Vec<Reservation>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct DayQuery {
    /// Calendar day, `YYYY-MM-DD`.
    pub date: NaiveDate,
}
