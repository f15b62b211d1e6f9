use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::generate_timestamp,
    reservation::value_objects::{CreateReservationInput, ReservationStatus},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Reservation {
    pub id: Uuid,
    pub user_id: Uuid,
    pub restaurant_id: Uuid,
    /// Wall-clock time at the restaurant.
    pub date_time: NaiveDateTime,
    pub guests: i32,
    pub special_requests: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: String,
    pub status: ReservationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Reservation {
    /// New reservations always start as pending.
    pub fn new(input: CreateReservationInput) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id: input.user_id,
            restaurant_id: input.restaurant_id,
            date_time: input.date_time,
            guests: input.guests,
            special_requests: input.special_requests.trim().to_string(),
            customer_name: input.customer_name.trim().to_string(),
            customer_phone: input.customer_phone.trim().to_string(),
            customer_email: input.customer_email.trim().to_string(),
            status: ReservationStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn set_status(&mut self, status: ReservationStatus) {
        let (now, _) = generate_timestamp();

        self.status = status;
        self.updated_at = now;
    }

    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.user_id == user_id
    }
}
