//! sea-orm entities for the DineSure schema.

pub mod prelude;

pub mod reservations;
pub mod restaurant_reviews;
pub mod restaurants;
pub mod user_favorite_restaurants;
pub mod users;
