pub mod db;
pub mod favorite;
pub mod health;
pub mod notification;
pub mod osm;
pub mod reservation;
pub mod restaurant;
pub mod user;
