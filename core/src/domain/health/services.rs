use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    favorite::ports::FavoriteRepository,
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    notification::ports::EmailSender,
    reservation::ports::ReservationRepository,
    restaurant::ports::{RestaurantImporter, RestaurantRepository},
    user::ports::UserRepository,
};

impl<R, U, RV, F, M, I, HC> HealthCheckService for Service<R, U, RV, F, M, I, HC>
where
    R: RestaurantRepository,
    U: UserRepository,
    RV: ReservationRepository,
    F: FavoriteRepository,
    M: EmailSender,
    I: RestaurantImporter,
    HC: HealthCheckRepository,
{
    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository.readness().await
    }

    async fn health(&self) -> Result<u64, CoreError> {
        self.health_check_repository.health().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::services::mocks::MockDependencies;

    #[tokio::test]
    async fn test_readiness_reports_database_status() {
        let mut deps = MockDependencies::default();
        deps.health
            .expect_readness()
            .returning(|| Box::pin(async { Ok(DatabaseHealthStatus::up(3)) }));

        let status = deps.into_service().readness().await.expect("status");
        assert!(status.is_up());
        assert_eq!(status.response_time_ms, 3);
    }
}
