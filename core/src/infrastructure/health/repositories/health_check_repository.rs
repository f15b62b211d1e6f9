use std::time::Instant;

use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, Statement};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    health::{entities::DatabaseHealthStatus, ports::HealthCheckRepository},
};

#[derive(Debug, Clone)]
pub struct PostgresHealthCheckRepository {
    pub db: DatabaseConnection,
}

impl PostgresHealthCheckRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl HealthCheckRepository for PostgresHealthCheckRepository {
    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        let started = Instant::now();
        let result = self.db.ping().await;
        let elapsed = started.elapsed().as_millis() as u64;

        Ok(match result {
            Ok(()) => DatabaseHealthStatus::up(elapsed),
            Err(e) => {
                error!("Database ping failed: {}", e);
                DatabaseHealthStatus::down(elapsed, e.to_string())
            }
        })
    }

    async fn health(&self) -> Result<u64, CoreError> {
        let started = Instant::now();

        self.db
            .execute(Statement::from_string(
                DatabaseBackend::Postgres,
                "SELECT 1".to_string(),
            ))
            .await
            .map_err(|e| {
                error!("Database health query failed: {}", e);
                CoreError::ServiceUnavailable("database is unreachable".to_string())
            })?;

        Ok(started.elapsed().as_millis() as u64)
    }
}
