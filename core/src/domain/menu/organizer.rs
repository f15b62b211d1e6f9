use tracing::debug;

use crate::domain::menu::{
    catalog::Catalog,
    entities::Dish,
    value_objects::{Cuisine, MenuCategory},
};

/// Categories rendered on a menu, in presentation order. Alcohol and specials are never shown.
pub const DISPLAY_CATEGORIES: [MenuCategory; 7] = [
    MenuCategory::Appetizer,
    MenuCategory::Soup,
    MenuCategory::Salad,
    MenuCategory::MainCourse,
    MenuCategory::SideDish,
    MenuCategory::Dessert,
    MenuCategory::Beverage,
];

pub const MAX_PER_CATEGORY: usize = 3;

/// Buckets dishes per display category, keeps the first three of each and sorts the result
/// by category then name. An empty main course bucket is replaced by the fallback dishes.
pub fn organize(dishes: &[Dish], catalog: &Catalog, primary_cuisine: Option<Cuisine>) -> Vec<Dish> {
    let mut organized = Vec::new();

    for category in DISPLAY_CATEGORIES {
        let before = organized.len();
        organized.extend(
            dishes
                .iter()
                .filter(|d| d.category == category)
                .take(MAX_PER_CATEGORY)
                .cloned(),
        );

        if category == MenuCategory::MainCourse && organized.len() == before {
            debug!(cuisine = ?primary_cuisine, "no main course left, using fallback dishes");
            organized.extend(catalog.fallback_main_courses().iter().cloned());
        }
    }

    organized.sort_by(|a, b| a.category.cmp(&b.category).then_with(|| a.name.cmp(&b.name)));
    organized
}
