use tracing::info;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    favorite::ports::FavoriteRepository,
    health::ports::HealthCheckRepository,
    notification::ports::EmailSender,
    reservation::ports::ReservationRepository,
    restaurant::ports::{RestaurantImporter, RestaurantRepository},
    user::{
        entities::{User, UserConfig},
        ports::{UserRepository, UserService},
        value_objects::{RegisterUserInput, UpdateProfileInput},
    },
};

impl<R, U, RV, F, M, I, HC> UserService for Service<R, U, RV, F, M, I, HC>
where
    R: RestaurantRepository,
    U: UserRepository,
    RV: ReservationRepository,
    F: FavoriteRepository,
    M: EmailSender,
    I: RestaurantImporter,
    HC: HealthCheckRepository,
{
    async fn register_user(&self, input: RegisterUserInput) -> Result<User, CoreError> {
        input.validate()?;

        let username = input.username.trim().to_string();
        let email = input.email.trim().to_lowercase();

        if self
            .user_repository
            .find_by_username_or_email(username.clone(), email.clone())
            .await?
            .is_some()
        {
            return Err(CoreError::AlreadyExists);
        }

        let user = self
            .user_repository
            .create_user(User::new(UserConfig {
                username,
                email,
                birth_year: input.birth_year,
                profile: input.profile,
            }))
            .await?;
        info!(user_id = %user.id, "user registered");

        Ok(user)
    }

    async fn get_user(&self, user_id: Uuid) -> Result<User, CoreError> {
        self.user_repository
            .get_by_id(user_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn update_profile(&self, input: UpdateProfileInput) -> Result<User, CoreError> {
        let mut user = self.get_user(input.user_id).await?;
        user.update_profile(input.profile);

        self.user_repository.update_user(user).await
    }
}
