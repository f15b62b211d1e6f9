use tracing::warn;

use crate::{
    domain::reservation::{entities::Reservation, value_objects::ReservationStatus},
    entity::reservations,
};

impl From<&reservations::Model> for Reservation {
    fn from(model: &reservations::Model) -> Self {
        let status = model.status.parse().unwrap_or_else(|e| {
            warn!("Reservation {} has {}, reading it as pending", model.id, e);
            ReservationStatus::Pending
        });

        Self {
            id: model.id,
            user_id: model.user_id,
            restaurant_id: model.restaurant_id,
            date_time: model.reservation_time,
            guests: model.guests,
            special_requests: model.special_requests.clone(),
            customer_name: model.customer_name.clone(),
            customer_phone: model.customer_phone.clone(),
            customer_email: model.customer_email.clone(),
            status,
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<reservations::Model> for Reservation {
    fn from(model: reservations::Model) -> Self {
        Self::from(&model)
    }
}
