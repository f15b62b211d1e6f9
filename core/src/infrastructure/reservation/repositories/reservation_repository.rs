use chrono::{Duration, NaiveDate, NaiveTime};
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        reservation::{
            entities::Reservation, ports::ReservationRepository,
            value_objects::ReservationStatus,
        },
    },
    entity::reservations::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresReservationRepository {
    pub db: DatabaseConnection,
}

impl PostgresReservationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_active_model(reservation: &Reservation) -> ActiveModel {
    ActiveModel {
        id: Set(reservation.id),
        user_id: Set(reservation.user_id),
        restaurant_id: Set(reservation.restaurant_id),
        reservation_time: Set(reservation.date_time),
        guests: Set(reservation.guests),
        special_requests: Set(reservation.special_requests.clone()),
        customer_name: Set(reservation.customer_name.clone()),
        customer_phone: Set(reservation.customer_phone.clone()),
        customer_email: Set(reservation.customer_email.clone()),
        status: Set(reservation.status.to_string()),
        created_at: Set(reservation.created_at.fixed_offset()),
        updated_at: Set(reservation.updated_at.fixed_offset()),
    }
}

impl ReservationRepository for PostgresReservationRepository {
    async fn create_reservation(&self, reservation: Reservation) -> Result<Reservation, CoreError> {
        let created = Entity::insert(to_active_model(&reservation))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create reservation: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Reservation::from(created))
    }

    async fn get_by_id(&self, reservation_id: Uuid) -> Result<Option<Reservation>, CoreError> {
        let reservation = Entity::find_by_id(reservation_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get reservation: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(reservation.map(Reservation::from))
    }

    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Reservation>, CoreError> {
        let reservations = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_desc(Column::ReservationTime)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list user reservations: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(reservations.into_iter().map(Reservation::from).collect())
    }

    async fn list_for_day(
        &self,
        restaurant_id: Uuid,
        date: NaiveDate,
    ) -> Result<Vec<Reservation>, CoreError> {
        let start_of_day = date.and_time(NaiveTime::MIN);
        let end_of_day = start_of_day + Duration::days(1);

        let reservations = Entity::find()
            .filter(Column::RestaurantId.eq(restaurant_id))
            .filter(Column::ReservationTime.gte(start_of_day))
            .filter(Column::ReservationTime.lt(end_of_day))
            .filter(Column::Status.ne(ReservationStatus::Cancelled.as_str()))
            .order_by_asc(Column::ReservationTime)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list restaurant reservations: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(reservations.into_iter().map(Reservation::from).collect())
    }

    async fn update_reservation(&self, reservation: Reservation) -> Result<Reservation, CoreError> {
        let updated = Entity::update(to_active_model(&reservation))
            .filter(Column::Id.eq(reservation.id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to update reservation: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Reservation::from(updated))
    }
}
