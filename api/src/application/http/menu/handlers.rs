pub mod get_cuisine_menu;
pub mod get_restaurant_menu;

use dinesure_core::domain::menu::{
    entities::{MenuSection, PersonalizedMenu},
    value_objects::Cuisine,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Menu grouped into category sections, in presentation order.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct MenuResponse {
    pub primary_cuisine: Option<Cuisine>,
    pub personalized: bool,
    pub total_dishes: usize,
    pub sections: Vec<MenuSection>,
}

impl From<PersonalizedMenu> for MenuResponse {
    fn from(menu: PersonalizedMenu) -> Self {
        Self {
            primary_cuisine: menu.primary_cuisine,
            personalized: menu.personalized,
            total_dishes: menu.dishes.len(),
            sections: menu.sections(),
        }
    }
}
