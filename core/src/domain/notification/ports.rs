use crate::domain::{
    common::entities::app_errors::CoreError, notification::value_objects::ReservationNotice,
};

#[cfg_attr(test, mockall::automock)]
pub trait EmailSender: Send + Sync {
    fn send_reservation_confirmation(
        &self,
        notice: ReservationNotice,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn send_reservation_cancellation(
        &self,
        notice: ReservationNotice,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
