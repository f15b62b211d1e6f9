use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::menu::value_objects::{Allergen, Cuisine, DietaryType, MenuCategory};

/// A menu item template. Catalog dishes are never mutated; personalization works on copies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Dish {
    pub name: String,
    pub description: String,
    pub price_cents: u32,
    pub category: MenuCategory,
    pub suitable_for_cuisines: BTreeSet<Cuisine>,
    /// Empty means the dish is not restricted to any dietary type.
    pub dietary_types: BTreeSet<DietaryType>,
    /// Empty means no allergen-free guarantee at all.
    pub allergen_free: BTreeSet<Allergen>,
    pub is_vegetarian: bool,
    pub is_vegan: bool,
    pub is_gluten_free: bool,
    pub is_diabetic_friendly: bool,
    pub is_lactose_free: bool,
    pub is_halal: bool,
    pub is_kosher: bool,
    pub is_puree_friendly: bool,
    pub is_popular: bool,
    pub is_special_diet: bool,
    pub ingredients: String,
    pub preparation_time_minutes: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MenuSection {
    pub category: MenuCategory,
    pub dishes: Vec<Dish>,
}

/// Output of one menu generation. Computed on demand and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PersonalizedMenu {
    /// `None` when the generic menu was used.
    pub primary_cuisine: Option<Cuisine>,
    pub personalized: bool,
    pub dishes: Vec<Dish>,
}

impl PersonalizedMenu {
    pub fn new(primary_cuisine: Option<Cuisine>, personalized: bool, dishes: Vec<Dish>) -> Self {
        Self {
            primary_cuisine,
            personalized,
            dishes,
        }
    }

    /// Groups the already ordered dishes into consecutive sections.
    pub fn sections(&self) -> Vec<MenuSection> {
        let mut sections: Vec<MenuSection> = Vec::new();

        for dish in &self.dishes {
            match sections.last_mut() {
                Some(section) if section.category == dish.category => {
                    section.dishes.push(dish.clone());
                }
                _ => sections.push(MenuSection {
                    category: dish.category,
                    dishes: vec![dish.clone()],
                }),
            }
        }

        sections
    }

    pub fn dishes_in(&self, category: MenuCategory) -> impl Iterator<Item = &Dish> {
        self.dishes.iter().filter(move |d| d.category == category)
    }
}
