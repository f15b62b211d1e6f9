pub mod common;
pub mod favorite;
pub mod health;
pub mod menu;
pub mod notification;
pub mod reservation;
pub mod restaurant;
pub mod user;
