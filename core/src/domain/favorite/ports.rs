use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    favorite::{entities::FavoriteRestaurant, value_objects::FavoriteInput},
    restaurant::entities::Restaurant,
};

#[cfg_attr(test, mockall::automock)]
pub trait FavoriteService: Send + Sync {
    /// Adds or removes the favorite. Returns whether the restaurant is now a favorite.
    fn toggle_favorite(
        &self,
        input: FavoriteInput,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;

    fn is_favorite(
        &self,
        input: FavoriteInput,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;

    fn list_favorites(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Vec<Restaurant>, CoreError>> + Send;

    fn count_favorites(
        &self,
        restaurant_id: Uuid,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait FavoriteRepository: Send + Sync {
    fn exists(
        &self,
        user_id: Uuid,
        restaurant_id: Uuid,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;

    fn add_favorite(
        &self,
        favorite: FavoriteRestaurant,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn remove_favorite(
        &self,
        user_id: Uuid,
        restaurant_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Most recently added first.
    fn list_restaurants(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Vec<Restaurant>, CoreError>> + Send;

    fn count_for_restaurant(
        &self,
        restaurant_id: Uuid,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;
}
