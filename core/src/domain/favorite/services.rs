use tracing::debug;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    favorite::{
        entities::FavoriteRestaurant,
        ports::{FavoriteRepository, FavoriteService},
        value_objects::FavoriteInput,
    },
    health::ports::HealthCheckRepository,
    notification::ports::EmailSender,
    reservation::ports::ReservationRepository,
    restaurant::{
        entities::Restaurant,
        ports::{RestaurantImporter, RestaurantRepository},
    },
    user::ports::UserRepository,
};

impl<R, U, RV, F, M, I, HC> FavoriteService for Service<R, U, RV, F, M, I, HC>
where
    R: RestaurantRepository,
    U: UserRepository,
    RV: ReservationRepository,
    F: FavoriteRepository,
    M: EmailSender,
    I: RestaurantImporter,
    HC: HealthCheckRepository,
{
    async fn toggle_favorite(&self, input: FavoriteInput) -> Result<bool, CoreError> {
        let FavoriteInput {
            user_id,
            restaurant_id,
        } = input;

        if self
            .favorite_repository
            .exists(user_id, restaurant_id)
            .await?
        {
            self.favorite_repository
                .remove_favorite(user_id, restaurant_id)
                .await?;
            debug!(%user_id, %restaurant_id, "favorite removed");
            return Ok(false);
        }

        self.user_repository
            .get_by_id(user_id)
            .await?
            .ok_or(CoreError::NotFound)?;
        self.restaurant_repository
            .get_by_id(restaurant_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        self.favorite_repository
            .add_favorite(FavoriteRestaurant::new(user_id, restaurant_id))
            .await?;
        debug!(%user_id, %restaurant_id, "favorite added");

        Ok(true)
    }

    async fn is_favorite(&self, input: FavoriteInput) -> Result<bool, CoreError> {
        self.favorite_repository
            .exists(input.user_id, input.restaurant_id)
            .await
    }

    async fn list_favorites(&self, user_id: Uuid) -> Result<Vec<Restaurant>, CoreError> {
        self.favorite_repository.list_restaurants(user_id).await
    }

    async fn count_favorites(&self, restaurant_id: Uuid) -> Result<u64, CoreError> {
        self.favorite_repository
            .count_for_restaurant(restaurant_id)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        common::services::mocks::MockDependencies,
        restaurant::entities::RestaurantConfig,
        user::entities::{User, UserConfig, UserProfile},
    };

    fn input() -> FavoriteInput {
        FavoriteInput {
            user_id: Uuid::new_v4(),
            restaurant_id: Uuid::new_v4(),
        }
    }

    fn expect_known_user(deps: &mut MockDependencies) {
        let user = User::new(UserConfig {
            username: "ana".to_string(),
            email: "ana@example.com".to_string(),
            birth_year: 1990,
            profile: UserProfile::default(),
        });
        deps.users.expect_get_by_id().returning(move |_| {
            let user = user.clone();
            Box::pin(async move { Ok(Some(user)) })
        });
    }

    #[tokio::test]
    async fn test_toggle_adds_missing_favorite() {
        let restaurant = Restaurant::new(RestaurantConfig {
            name: "Trattoria".to_string(),
            ..Default::default()
        });

        let mut deps = MockDependencies::default();
        deps.favorites
            .expect_exists()
            .returning(|_, _| Box::pin(async { Ok(false) }));
        expect_known_user(&mut deps);
        deps.restaurants.expect_get_by_id().returning(move |_| {
            let restaurant = restaurant.clone();
            Box::pin(async move { Ok(Some(restaurant)) })
        });
        deps.favorites
            .expect_add_favorite()
            .times(1)
            .returning(|_| Box::pin(async { Ok(()) }));
        deps.favorites.expect_remove_favorite().never();

        let now_favorite = deps.into_service().toggle_favorite(input()).await;
        assert_eq!(now_favorite, Ok(true));
    }

    #[tokio::test]
    async fn test_toggle_removes_existing_favorite() {
        let mut deps = MockDependencies::default();
        deps.favorites
            .expect_exists()
            .returning(|_, _| Box::pin(async { Ok(true) }));
        deps.favorites
            .expect_remove_favorite()
            .times(1)
            .returning(|_, _| Box::pin(async { Ok(()) }));
        deps.favorites.expect_add_favorite().never();

        let now_favorite = deps.into_service().toggle_favorite(input()).await;
        assert_eq!(now_favorite, Ok(false));
    }

    #[tokio::test]
    async fn test_cannot_favorite_unknown_restaurant() {
        let mut deps = MockDependencies::default();
        deps.favorites
            .expect_exists()
            .returning(|_, _| Box::pin(async { Ok(false) }));
        expect_known_user(&mut deps);
        deps.restaurants
            .expect_get_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));
        deps.favorites.expect_add_favorite().never();

        let result = deps.into_service().toggle_favorite(input()).await;
        assert_eq!(result, Err(CoreError::NotFound));
    }

    #[tokio::test]
    async fn test_unknown_user_cannot_add_favorite() {
        let mut deps = MockDependencies::default();
        deps.favorites
            .expect_exists()
            .returning(|_, _| Box::pin(async { Ok(false) }));
        deps.users
            .expect_get_by_id()
            .times(1)
            .returning(|_| Box::pin(async { Ok(None) }));
        deps.restaurants.expect_get_by_id().never();
        deps.favorites.expect_add_favorite().never();

        let result = deps.into_service().toggle_favorite(input()).await;
        assert_eq!(result, Err(CoreError::NotFound));
    }

    #[tokio::test]
    async fn test_count_is_delegated() {
        let mut deps = MockDependencies::default();
        deps.favorites
            .expect_count_for_restaurant()
            .returning(|_| Box::pin(async { Ok(7) }));

        let count = deps.into_service().count_favorites(Uuid::new_v4()).await;
        assert_eq!(count, Ok(7));
    }
}
