use chrono::{Local, NaiveDate};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    favorite::ports::FavoriteRepository,
    health::ports::HealthCheckRepository,
    notification::{ports::EmailSender, value_objects::ReservationNotice},
    reservation::{
        entities::Reservation,
        ports::{ReservationRepository, ReservationService},
        slots::compute_time_slots,
        value_objects::{
            CancelReservationInput, CreateReservationInput, GetTimeSlotsInput, ReservationStatus,
            TimeSlot, UpdateReservationStatusInput,
        },
    },
    restaurant::{
        entities::Restaurant,
        ports::{RestaurantImporter, RestaurantRepository},
    },
    user::{entities::User, ports::UserRepository},
};

fn notice_for(reservation: &Reservation, restaurant: &Restaurant) -> ReservationNotice {
    ReservationNotice {
        reservation_id: reservation.id,
        to: reservation.customer_email.clone(),
        customer_name: reservation.customer_name.clone(),
        restaurant_name: restaurant.name.clone(),
        date_time: reservation.date_time,
        guests: reservation.guests,
    }
}

impl<R, U, RV, F, M, I, HC> Service<R, U, RV, F, M, I, HC>
where
    R: RestaurantRepository,
    U: UserRepository,
    RV: ReservationRepository,
    F: FavoriteRepository,
    M: EmailSender,
    I: RestaurantImporter,
    HC: HealthCheckRepository,
{
    async fn get_existing_restaurant(&self, restaurant_id: Uuid) -> Result<Restaurant, CoreError> {
        self.restaurant_repository
            .get_by_id(restaurant_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn get_existing_user(&self, user_id: Uuid) -> Result<User, CoreError> {
        self.user_repository
            .get_by_id(user_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn get_existing_reservation(
        &self,
        reservation_id: Uuid,
    ) -> Result<Reservation, CoreError> {
        self.reservation_repository
            .get_by_id(reservation_id)
            .await?
            .ok_or(CoreError::NotFound)
    }
}

impl<R, U, RV, F, M, I, HC> ReservationService for Service<R, U, RV, F, M, I, HC>
where
    R: RestaurantRepository,
    U: UserRepository,
    RV: ReservationRepository,
    F: FavoriteRepository,
    M: EmailSender,
    I: RestaurantImporter,
    HC: HealthCheckRepository,
{
    async fn create_reservation(
        &self,
        input: CreateReservationInput,
    ) -> Result<Reservation, CoreError> {
        input.validate()?;

        self.get_existing_user(input.user_id).await?;
        let restaurant = self.get_existing_restaurant(input.restaurant_id).await?;
        let reservation = self
            .reservation_repository
            .create_reservation(Reservation::new(input))
            .await?;

        if let Err(e) = self
            .mailer
            .send_reservation_confirmation(notice_for(&reservation, &restaurant))
            .await
        {
            error!(
                "Failed to send confirmation email for reservation {}: {}",
                reservation.id, e
            );
        }

        Ok(reservation)
    }

    async fn list_user_reservations(&self, user_id: Uuid) -> Result<Vec<Reservation>, CoreError> {
        self.reservation_repository.list_by_user(user_id).await
    }

    async fn list_restaurant_reservations(
        &self,
        restaurant_id: Uuid,
        date: NaiveDate,
    ) -> Result<Vec<Reservation>, CoreError> {
        self.reservation_repository
            .list_for_day(restaurant_id, date)
            .await
    }

    async fn get_available_time_slots(
        &self,
        input: GetTimeSlotsInput,
    ) -> Result<Vec<TimeSlot>, CoreError> {
        let restaurant = self.get_existing_restaurant(input.restaurant_id).await?;
        let booked: Vec<_> = self
            .reservation_repository
            .list_for_day(restaurant.id, input.date)
            .await?
            .into_iter()
            .map(|r| r.date_time)
            .collect();

        Ok(compute_time_slots(
            &self.reservation_policy,
            input.date,
            Local::now().naive_local(),
            &booked,
        ))
    }

    async fn update_reservation_status(
        &self,
        input: UpdateReservationStatusInput,
    ) -> Result<Reservation, CoreError> {
        let mut reservation = self.get_existing_reservation(input.reservation_id).await?;
        reservation.set_status(input.status);

        self.reservation_repository
            .update_reservation(reservation)
            .await
    }

    async fn cancel_reservation(
        &self,
        input: CancelReservationInput,
    ) -> Result<Reservation, CoreError> {
        let mut reservation = self.get_existing_reservation(input.reservation_id).await?;
        if !reservation.is_owned_by(input.user_id) {
            return Err(CoreError::Forbidden(
                "reservation belongs to another user".to_string(),
            ));
        }

        reservation.set_status(ReservationStatus::Cancelled);
        let reservation = self
            .reservation_repository
            .update_reservation(reservation)
            .await?;

        match self
            .restaurant_repository
            .get_by_id(reservation.restaurant_id)
            .await
        {
            Ok(Some(restaurant)) => {
                if let Err(e) = self
                    .mailer
                    .send_reservation_cancellation(notice_for(&reservation, &restaurant))
                    .await
                {
                    error!(
                        "Failed to send cancellation email for reservation {}: {}",
                        reservation.id, e
                    );
                }
            }
            Ok(None) => {}
            Err(e) => error!(
                "Failed to load restaurant for cancellation email {}: {}",
                reservation.id, e
            ),
        }

        Ok(reservation)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDateTime};

    use super::*;
    use crate::domain::{
        common::services::mocks::MockDependencies,
        restaurant::entities::RestaurantConfig,
        user::entities::{UserConfig, UserProfile},
    };

    fn restaurant() -> Restaurant {
        Restaurant::new(RestaurantConfig {
            name: "Trattoria".to_string(),
            ..Default::default()
        })
    }

    fn tomorrow_at(hour: u32) -> NaiveDateTime {
        (Local::now().date_naive() + Duration::days(1))
            .and_hms_opt(hour, 0, 0)
            .expect("valid time")
    }

    fn input(restaurant_id: Uuid, user_id: Uuid) -> CreateReservationInput {
        CreateReservationInput {
            user_id,
            restaurant_id,
            date_time: tomorrow_at(19),
            guests: 2,
            special_requests: "Window table".to_string(),
            customer_name: "Ana Popescu".to_string(),
            customer_phone: "0721000000".to_string(),
            customer_email: "ana@example.com".to_string(),
        }
    }

    fn user() -> User {
        User::new(UserConfig {
            username: "ana".to_string(),
            email: "ana@example.com".to_string(),
            birth_year: 1990,
            profile: UserProfile::default(),
        })
    }

    fn expect_user(deps: &mut MockDependencies, user: User) {
        deps.users.expect_get_by_id().returning(move |_| {
            let user = user.clone();
            Box::pin(async move { Ok(Some(user)) })
        });
    }

    fn expect_restaurant(deps: &mut MockDependencies, restaurant: Restaurant) {
        deps.restaurants.expect_get_by_id().returning(move |_| {
            let restaurant = restaurant.clone();
            Box::pin(async move { Ok(Some(restaurant)) })
        });
    }

    #[tokio::test]
    async fn test_new_reservation_is_pending_and_confirmed_by_email() {
        let restaurant = restaurant();
        let restaurant_id = restaurant.id;
        let user = user();
        let user_id = user.id;
        let mut deps = MockDependencies::default();
        expect_user(&mut deps, user);
        expect_restaurant(&mut deps, restaurant);
        deps.reservations
            .expect_create_reservation()
            .returning(|r| Box::pin(async move { Ok(r) }));
        deps.mailer
            .expect_send_reservation_confirmation()
            .times(1)
            .withf(|notice| notice.restaurant_name == "Trattoria" && notice.guests == 2)
            .returning(|_| Box::pin(async { Ok(()) }));

        let reservation = deps
            .into_service()
            .create_reservation(input(restaurant_id, user_id))
            .await
            .expect("reservation");
        assert_eq!(reservation.status, ReservationStatus::Pending);
        assert_eq!(reservation.special_requests, "Window table");
    }

    #[tokio::test]
    async fn test_email_failure_does_not_fail_reservation() {
        let restaurant = restaurant();
        let restaurant_id = restaurant.id;
        let mut deps = MockDependencies::default();
        expect_user(&mut deps, user());
        expect_restaurant(&mut deps, restaurant);
        deps.reservations
            .expect_create_reservation()
            .returning(|r| Box::pin(async move { Ok(r) }));
        deps.mailer
            .expect_send_reservation_confirmation()
            .returning(|_| {
                Box::pin(async {
                    Err(CoreError::ExternalServiceError("smtp down".to_string()))
                })
            });

        let result = deps
            .into_service()
            .create_reservation(input(restaurant_id, Uuid::new_v4()))
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_reservation_for_unknown_restaurant_is_not_found() {
        let mut deps = MockDependencies::default();
        expect_user(&mut deps, user());
        deps.restaurants
            .expect_get_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));
        deps.reservations.expect_create_reservation().never();

        let result = deps
            .into_service()
            .create_reservation(input(Uuid::new_v4(), Uuid::new_v4()))
            .await;
        assert_eq!(result, Err(CoreError::NotFound));
    }

    #[tokio::test]
    async fn test_reservation_for_unknown_user_is_not_found() {
        let mut deps = MockDependencies::default();
        deps.users
            .expect_get_by_id()
            .times(1)
            .returning(|_| Box::pin(async { Ok(None) }));
        deps.restaurants.expect_get_by_id().never();
        deps.reservations.expect_create_reservation().never();
        deps.mailer.expect_send_reservation_confirmation().never();

        let result = deps
            .into_service()
            .create_reservation(input(Uuid::new_v4(), Uuid::new_v4()))
            .await;
        assert_eq!(result, Err(CoreError::NotFound));
    }

    #[tokio::test]
    async fn test_only_owner_can_cancel() {
        let owner = Uuid::new_v4();
        let reservation = Reservation::new(input(Uuid::new_v4(), owner));
        let reservation_id = reservation.id;

        let mut deps = MockDependencies::default();
        deps.reservations.expect_get_by_id().returning(move |_| {
            let reservation = reservation.clone();
            Box::pin(async move { Ok(Some(reservation)) })
        });
        deps.reservations.expect_update_reservation().never();

        let result = deps
            .into_service()
            .cancel_reservation(CancelReservationInput {
                reservation_id,
                user_id: Uuid::new_v4(),
            })
            .await;
        assert!(matches!(result, Err(CoreError::Forbidden(_))));
    }

    #[tokio::test]
    async fn test_cancel_marks_cancelled_and_notifies() {
        let owner = Uuid::new_v4();
        let restaurant = restaurant();
        let reservation = Reservation::new(input(restaurant.id, owner));
        let reservation_id = reservation.id;

        let mut deps = MockDependencies::default();
        deps.reservations.expect_get_by_id().returning(move |_| {
            let reservation = reservation.clone();
            Box::pin(async move { Ok(Some(reservation)) })
        });
        deps.reservations
            .expect_update_reservation()
            .withf(|r| r.status == ReservationStatus::Cancelled)
            .returning(|r| Box::pin(async move { Ok(r) }));
        expect_restaurant(&mut deps, restaurant);
        deps.mailer
            .expect_send_reservation_cancellation()
            .times(1)
            .returning(|_| Box::pin(async { Ok(()) }));

        let cancelled = deps
            .into_service()
            .cancel_reservation(CancelReservationInput {
                reservation_id,
                user_id: owner,
            })
            .await
            .expect("cancelled");
        assert_eq!(cancelled.status, ReservationStatus::Cancelled);
    }

    #[tokio::test]
    async fn test_update_missing_reservation_is_not_found() {
        let mut deps = MockDependencies::default();
        deps.reservations
            .expect_get_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));

        let result = deps
            .into_service()
            .update_reservation_status(UpdateReservationStatusInput {
                reservation_id: Uuid::new_v4(),
                status: ReservationStatus::Confirmed,
            })
            .await;
        assert_eq!(result, Err(CoreError::NotFound));
    }

    #[tokio::test]
    async fn test_time_slots_count_existing_reservations() {
        let restaurant = restaurant();
        let restaurant_id = restaurant.id;
        let booked = Reservation::new(input(restaurant_id, Uuid::new_v4()));

        let mut deps = MockDependencies::default();
        expect_restaurant(&mut deps, restaurant);
        deps.reservations
            .expect_list_for_day()
            .returning(move |_, _| {
                let booked = booked.clone();
                Box::pin(async move { Ok(vec![booked]) })
            });

        let slots = deps
            .into_service()
            .get_available_time_slots(GetTimeSlotsInput {
                restaurant_id,
                date: tomorrow_at(0).date(),
            })
            .await
            .expect("slots");
        assert_eq!(slots.len(), 22);
        let seven_pm = slots
            .iter()
            .find(|s| s.date_time == tomorrow_at(19))
            .expect("slot at 19:00");
        assert_eq!(seven_pm.existing_reservations, 1);
        assert!(seven_pm.is_available);
    }
}
