pub mod mappers;
pub mod repositories;

pub use repositories::reservation_repository::PostgresReservationRepository;
