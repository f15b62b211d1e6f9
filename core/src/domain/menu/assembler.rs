use crate::domain::menu::{
    catalog::Catalog,
    entities::Dish,
    value_objects::{Cuisine, RestaurantCapabilities},
};

/// Cuisine menu of the primary cuisine followed by the common items.
pub fn cuisine_pool(catalog: &Catalog, primary_cuisine: Option<Cuisine>) -> Vec<&Dish> {
    catalog
        .cuisine_menu(primary_cuisine)
        .iter()
        .chain(catalog.common_items())
        .collect()
}

/// Unfiltered candidate pool of a restaurant. Duplicates across source lists are kept.
pub fn assemble_candidate_pool<'a>(
    catalog: &'a Catalog,
    capabilities: &RestaurantCapabilities,
) -> Vec<&'a Dish> {
    let mut pool = cuisine_pool(catalog, capabilities.primary_cuisine());

    for axis in capabilities.declared_axes() {
        pool.extend(catalog.capability_dishes(axis));
    }

    pool
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::domain::menu::value_objects::{Allergen, CapabilityAxis, DietaryType};

    fn names<'a>(dishes: &[&'a Dish]) -> Vec<&'a str> {
        dishes.iter().map(|d| d.name.as_str()).collect()
    }

    #[test]
    fn test_empty_cuisine_list_falls_back_to_generic_menu() {
        let catalog = Catalog::global();
        let pool = assemble_candidate_pool(catalog, &RestaurantCapabilities::default());

        let generic = catalog.generic_menu();
        assert_eq!(pool.len(), generic.len() + catalog.common_items().len());
        assert!(pool.iter().zip(generic).all(|(a, b)| *a == b));
    }

    #[test]
    fn test_uncurated_primary_cuisine_uses_generic_menu() {
        let catalog = Catalog::global();
        let capabilities = RestaurantCapabilities {
            cuisines: vec![Cuisine::Korean, Cuisine::Italian],
            ..Default::default()
        };

        let pool = assemble_candidate_pool(catalog, &capabilities);
        assert_eq!(pool[0], &catalog.generic_menu()[0]);
    }

    #[test]
    fn test_pool_order_is_cuisine_then_common_then_capabilities() {
        let catalog = Catalog::global();
        let capabilities = RestaurantCapabilities {
            cuisines: vec![Cuisine::Italian],
            has_vegetarian_options: true,
            has_kosher_options: true,
            dietary_types: BTreeSet::from([DietaryType::Keto]),
            allergen_free: BTreeSet::from([Allergen::Eggs]),
            ..Default::default()
        };

        let pool = assemble_candidate_pool(catalog, &capabilities);
        let italian = catalog.cuisine_menu(Some(Cuisine::Italian)).len();
        let common = catalog.common_items().len();

        assert_eq!(pool[0].name, "Bruschetta al Pomodoro");
        assert_eq!(pool[italian].name, "Coca Cola");
        assert_eq!(pool.len(), italian + common + 8);

        let tail = names(&pool[italian + common..]);
        let mut expected = Vec::new();
        for axis in [
            CapabilityAxis::Vegetarian,
            CapabilityAxis::Keto,
            CapabilityAxis::Kosher,
            CapabilityAxis::AllergenFree(Allergen::Eggs),
        ] {
            expected.extend(catalog.capability_dishes(axis).iter().map(|d| d.name.as_str()));
        }
        assert_eq!(tail, expected);
    }

    #[test]
    fn test_duplicates_are_preserved() {
        let catalog = Catalog::global();
        let low_carb = RestaurantCapabilities {
            dietary_types: BTreeSet::from([DietaryType::LowCarb]),
            ..Default::default()
        };
        let pool = assemble_candidate_pool(catalog, &low_carb);
        let lasagnas = pool.iter().filter(|d| d.name == "Zucchini Lasagna").count();
        assert_eq!(lasagnas, 2);
    }
}
