use crate::domain::{
    common::entities::app_errors::CoreError,
    menu::{
        entities::PersonalizedMenu,
        value_objects::{GenerateCuisineMenuInput, GenerateRestaurantMenuInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait MenuService: Send + Sync {
    /// Menu of a stored restaurant, filtered for the user when one is given.
    fn generate_menu_for_restaurant(
        &self,
        input: GenerateRestaurantMenuInput,
    ) -> impl Future<Output = Result<PersonalizedMenu, CoreError>> + Send;

    /// Menu built from a cuisine list alone, without restaurant capability dishes.
    fn generate_menu_for_user(
        &self,
        input: GenerateCuisineMenuInput,
    ) -> impl Future<Output = Result<PersonalizedMenu, CoreError>> + Send;
}
