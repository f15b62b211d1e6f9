use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    restaurant::{
        entities::{Restaurant, RestaurantReview},
        value_objects::{CreateReviewInput, ImportSummary, ImportedRestaurant, RestaurantFilter},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait RestaurantService: Send + Sync {
    fn list_restaurants(
        &self,
        filter: RestaurantFilter,
    ) -> impl Future<Output = Result<Vec<Restaurant>, CoreError>> + Send;

    fn get_restaurant(
        &self,
        restaurant_id: Uuid,
    ) -> impl Future<Output = Result<Restaurant, CoreError>> + Send;

    fn list_reviews(
        &self,
        restaurant_id: Uuid,
    ) -> impl Future<Output = Result<Vec<RestaurantReview>, CoreError>> + Send;

    fn create_review(
        &self,
        input: CreateReviewInput,
    ) -> impl Future<Output = Result<RestaurantReview, CoreError>> + Send;

    /// Pulls restaurants from the map data source and stores the ones not seen before.
    fn import_restaurants(&self) -> impl Future<Output = Result<ImportSummary, CoreError>> + Send;

    /// Returns the number of restaurants that were updated.
    fn seed_restaurant_tags(&self) -> impl Future<Output = Result<usize, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait RestaurantRepository: Send + Sync {
    /// Active restaurants only.
    fn list(
        &self,
        filter: RestaurantFilter,
    ) -> impl Future<Output = Result<Vec<Restaurant>, CoreError>> + Send;

    fn get_by_id(
        &self,
        restaurant_id: Uuid,
    ) -> impl Future<Output = Result<Option<Restaurant>, CoreError>> + Send;

    /// Oldest first.
    fn list_first(
        &self,
        limit: u64,
    ) -> impl Future<Output = Result<Vec<Restaurant>, CoreError>> + Send;

    fn create_restaurant(
        &self,
        restaurant: Restaurant,
    ) -> impl Future<Output = Result<Restaurant, CoreError>> + Send;

    fn update_restaurant(
        &self,
        restaurant: Restaurant,
    ) -> impl Future<Output = Result<Restaurant, CoreError>> + Send;

    /// Whether a restaurant with this exact name has an address containing both parts.
    fn exists_similar(
        &self,
        name: String,
        street: String,
        number: String,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;

    /// Newest first.
    fn list_reviews(
        &self,
        restaurant_id: Uuid,
    ) -> impl Future<Output = Result<Vec<RestaurantReview>, CoreError>> + Send;

    fn create_review(
        &self,
        review: RestaurantReview,
    ) -> impl Future<Output = Result<RestaurantReview, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait RestaurantImporter: Send + Sync {
    fn fetch_restaurants(
        &self,
    ) -> impl Future<Output = Result<Vec<ImportedRestaurant>, CoreError>> + Send;
}
