use crate::domain::{
    favorite::ports::FavoriteRepository,
    health::ports::HealthCheckRepository,
    menu::catalog::Catalog,
    notification::ports::EmailSender,
    reservation::{ports::ReservationRepository, value_objects::ReservationPolicy},
    restaurant::ports::{RestaurantImporter, RestaurantRepository},
    user::ports::UserRepository,
};

/// Application service. Every domain service trait is implemented on it.
#[derive(Clone)]
pub struct Service<R, U, RV, F, M, I, HC>
where
    R: RestaurantRepository,
    U: UserRepository,
    RV: ReservationRepository,
    F: FavoriteRepository,
    M: EmailSender,
    I: RestaurantImporter,
    HC: HealthCheckRepository,
{
    pub restaurant_repository: R,
    pub user_repository: U,
    pub reservation_repository: RV,
    pub favorite_repository: F,
    pub mailer: M,
    pub restaurant_importer: I,
    pub health_check_repository: HC,
    pub catalog: &'static Catalog,
    pub reservation_policy: ReservationPolicy,
}

#[cfg(test)]
pub mod mocks {
    use super::Service;
    use crate::domain::{
        favorite::ports::MockFavoriteRepository,
        health::ports::MockHealthCheckRepository,
        menu::catalog::Catalog,
        notification::ports::MockEmailSender,
        reservation::{ports::MockReservationRepository, value_objects::ReservationPolicy},
        restaurant::ports::{MockRestaurantImporter, MockRestaurantRepository},
        user::ports::MockUserRepository,
    };

    pub type MockedService = Service<
        MockRestaurantRepository,
        MockUserRepository,
        MockReservationRepository,
        MockFavoriteRepository,
        MockEmailSender,
        MockRestaurantImporter,
        MockHealthCheckRepository,
    >;

    #[derive(Default)]
    pub struct MockDependencies {
        pub restaurants: MockRestaurantRepository,
        pub users: MockUserRepository,
        pub reservations: MockReservationRepository,
        pub favorites: MockFavoriteRepository,
        pub mailer: MockEmailSender,
        pub importer: MockRestaurantImporter,
        pub health: MockHealthCheckRepository,
    }

    impl MockDependencies {
        pub fn into_service(self) -> MockedService {
            Service {
                restaurant_repository: self.restaurants,
                user_repository: self.users,
                reservation_repository: self.reservations,
                favorite_repository: self.favorites,
                mailer: self.mailer,
                restaurant_importer: self.importer,
                health_check_repository: self.health,
                catalog: Catalog::global(),
                reservation_policy: ReservationPolicy::default(),
            }
        }
    }
}
