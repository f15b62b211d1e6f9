pub mod repositories;

pub use repositories::favorite_repository::PostgresFavoriteRepository;
