pub use super::reservations::Entity as Reservations;
pub use super::restaurant_reviews::Entity as RestaurantReviews;
pub use super::restaurants::Entity as Restaurants;
pub use super::user_favorite_restaurants::Entity as UserFavoriteRestaurants;
pub use super::users::Entity as Users;
