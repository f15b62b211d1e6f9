use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    reservation::{
        entities::Reservation,
        value_objects::{
            CancelReservationInput, CreateReservationInput, GetTimeSlotsInput, TimeSlot,
            UpdateReservationStatusInput,
        },
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait ReservationService: Send + Sync {
    fn create_reservation(
        &self,
        input: CreateReservationInput,
    ) -> impl Future<Output = Result<Reservation, CoreError>> + Send;

    fn list_user_reservations(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Vec<Reservation>, CoreError>> + Send;

    fn list_restaurant_reservations(
        &self,
        restaurant_id: Uuid,
        date: NaiveDate,
    ) -> impl Future<Output = Result<Vec<Reservation>, CoreError>> + Send;

    fn get_available_time_slots(
        &self,
        input: GetTimeSlotsInput,
    ) -> impl Future<Output = Result<Vec<TimeSlot>, CoreError>> + Send;

    fn update_reservation_status(
        &self,
        input: UpdateReservationStatusInput,
    ) -> impl Future<Output = Result<Reservation, CoreError>> + Send;

    fn cancel_reservation(
        &self,
        input: CancelReservationInput,
    ) -> impl Future<Output = Result<Reservation, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait ReservationRepository: Send + Sync {
    fn create_reservation(
        &self,
        reservation: Reservation,
    ) -> impl Future<Output = Result<Reservation, CoreError>> + Send;

    fn get_by_id(
        &self,
        reservation_id: Uuid,
    ) -> impl Future<Output = Result<Option<Reservation>, CoreError>> + Send;

    /// Newest reservation time first.
    fn list_by_user(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Vec<Reservation>, CoreError>> + Send;

    /// Non-cancelled reservations starting on `date`, earliest first.
    fn list_for_day(
        &self,
        restaurant_id: Uuid,
        date: NaiveDate,
    ) -> impl Future<Output = Result<Vec<Reservation>, CoreError>> + Send;

    fn update_reservation(
        &self,
        reservation: Reservation,
    ) -> impl Future<Output = Result<Reservation, CoreError>> + Send;
}
