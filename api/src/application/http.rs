pub mod favorite;
pub mod health;
pub mod menu;
pub mod query_extractor;
pub mod query_params;
pub mod reservation;
pub mod restaurant;
pub mod server;
pub mod user;
