pub mod create_review;
pub mod get_restaurant;
pub mod get_reviews;
pub mod import_restaurants;
pub mod list_restaurants;
pub mod seed_restaurant_tags;
