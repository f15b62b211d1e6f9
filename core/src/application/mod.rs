use crate::{
    domain::{
        common::{DineSureConfig, services::Service},
        menu::catalog::Catalog,
    },
    infrastructure::{
        db::postgres::{Postgres, PostgresConfig},
        favorite::PostgresFavoriteRepository,
        health::PostgresHealthCheckRepository,
        notification::LogMailer,
        osm::OverpassRestaurantImporter,
        reservation::PostgresReservationRepository,
        restaurant::PostgresRestaurantRepository,
        user::PostgresUserRepository,
    },
};

pub type DineSureService = Service<
    PostgresRestaurantRepository,
    PostgresUserRepository,
    PostgresReservationRepository,
    PostgresFavoriteRepository,
    LogMailer,
    OverpassRestaurantImporter,
    PostgresHealthCheckRepository,
>;

pub async fn create_service(config: DineSureConfig) -> Result<DineSureService, anyhow::Error> {
    config.reservations.validate()?;

    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.url(),
    })
    .await?;

    let restaurant_importer = OverpassRestaurantImporter::new(config.overpass)?;

    Ok(Service {
        restaurant_repository: PostgresRestaurantRepository::new(postgres.get_db()),
        user_repository: PostgresUserRepository::new(postgres.get_db()),
        reservation_repository: PostgresReservationRepository::new(postgres.get_db()),
        favorite_repository: PostgresFavoriteRepository::new(postgres.get_db()),
        mailer: LogMailer::new(config.mail),
        restaurant_importer,
        health_check_repository: PostgresHealthCheckRepository::new(postgres.get_db()),
        catalog: Catalog::global(),
        reservation_policy: config.reservations,
    })
}
