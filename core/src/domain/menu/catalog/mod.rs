use std::{collections::HashMap, sync::LazyLock};

use crate::domain::menu::{
    entities::Dish,
    value_objects::{Allergen, CapabilityAxis, Cuisine, SpecializationAxis},
};

// One dish per line.
#[rustfmt::skip]
mod capabilities;
#[rustfmt::skip]
mod cuisines;
mod seed;
#[rustfmt::skip]
mod specializations;

use seed::{DishSeed, build_all};

static CATALOG: LazyLock<Catalog> = LazyLock::new(Catalog::build);

/// Immutable library of dish templates. Built once and shared read-only.
#[derive(Debug, Clone)]
pub struct Catalog {
    curated: HashMap<Cuisine, Vec<Dish>>,
    generic: Vec<Dish>,
    specializations: HashMap<SpecializationAxis, Vec<Dish>>,
    capabilities: HashMap<CapabilityAxis, Vec<Dish>>,
    common_items: Vec<Dish>,
    fallback_main_courses: Vec<Dish>,
}

impl Catalog {
    pub fn global() -> &'static Catalog {
        &CATALOG
    }

    pub fn build() -> Self {
        let curated = [
            (Cuisine::Italian, cuisines::ITALIAN),
            (Cuisine::Chinese, cuisines::CHINESE),
            (Cuisine::Indian, cuisines::INDIAN),
            (Cuisine::French, cuisines::FRENCH),
            (Cuisine::Mexican, cuisines::MEXICAN),
            (Cuisine::Thai, cuisines::THAI),
            (Cuisine::Japanese, cuisines::JAPANESE),
            (Cuisine::Romanian, cuisines::ROMANIAN),
        ]
        .into_iter()
        .map(|(cuisine, seeds)| (cuisine, build_all(seeds)))
        .collect();

        let specializations: HashMap<SpecializationAxis, Vec<Dish>> = SpecializationAxis::ALL
            .into_iter()
            .map(|axis| (axis, build_all(specialization_seeds(axis))))
            .collect();

        let mut common_items = build_all(cuisines::COMMON_BEVERAGES);
        for axis in SpecializationAxis::ALL {
            if let Some(dishes) = specializations.get(&axis) {
                common_items.extend(dishes.iter().cloned());
            }
        }

        let capabilities = capability_axes()
            .map(|axis| (axis, build_all(capability_seeds(axis))))
            .collect();

        Self {
            curated,
            generic: build_all(cuisines::GENERIC),
            specializations,
            capabilities,
            common_items,
            fallback_main_courses: build_all(cuisines::FALLBACK_MAIN_COURSES),
        }
    }

    /// Curated menu of a cuisine, if one exists.
    pub fn curated_menu(&self, cuisine: Cuisine) -> Option<&[Dish]> {
        self.curated.get(&cuisine).map(Vec::as_slice)
    }

    /// Menu served for a primary cuisine. Cuisines without a curated menu, and no cuisine
    /// at all, get the generic menu.
    pub fn cuisine_menu(&self, cuisine: Option<Cuisine>) -> &[Dish] {
        cuisine
            .and_then(|c| self.curated_menu(c))
            .unwrap_or(self.generic.as_slice())
    }

    pub fn generic_menu(&self) -> &[Dish] {
        &self.generic
    }

    pub fn specialization_menu(&self, axis: SpecializationAxis) -> &[Dish] {
        self.specializations
            .get(&axis)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Beverages followed by every specialization library in axis order.
    pub fn common_items(&self) -> &[Dish] {
        &self.common_items
    }

    /// Dish pair for a restaurant capability. Empty for allergens without dedicated dishes.
    pub fn capability_dishes(&self, axis: CapabilityAxis) -> &[Dish] {
        self.capabilities
            .get(&axis)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn fallback_main_courses(&self) -> &[Dish] {
        &self.fallback_main_courses
    }
}

fn specialization_seeds(axis: SpecializationAxis) -> &'static [DishSeed] {
    match axis {
        SpecializationAxis::Vegetarian => specializations::VEGETARIAN,
        SpecializationAxis::Vegan => specializations::VEGAN,
        SpecializationAxis::GlutenFree => specializations::GLUTEN_FREE,
        SpecializationAxis::DiabeticFriendly => specializations::DIABETIC_FRIENDLY,
        SpecializationAxis::LactoseFree => specializations::LACTOSE_FREE,
        SpecializationAxis::Halal => specializations::HALAL,
        SpecializationAxis::Kosher => specializations::KOSHER,
        SpecializationAxis::PureeFriendly => specializations::PUREE_FRIENDLY,
        SpecializationAxis::AllergenFree => specializations::ALLERGEN_FREE,
        SpecializationAxis::Paleo => specializations::PALEO,
        SpecializationAxis::Keto => specializations::KETO,
        SpecializationAxis::Mediterranean => specializations::MEDITERRANEAN,
        SpecializationAxis::LowCarb => specializations::LOW_CARB,
    }
}

fn capability_axes() -> impl Iterator<Item = CapabilityAxis> {
    [
        CapabilityAxis::Vegetarian,
        CapabilityAxis::Vegan,
        CapabilityAxis::Paleo,
        CapabilityAxis::Keto,
        CapabilityAxis::Mediterranean,
        CapabilityAxis::Pescatarian,
        CapabilityAxis::Flexitarian,
        CapabilityAxis::LowCarb,
        CapabilityAxis::Halal,
        CapabilityAxis::Kosher,
        CapabilityAxis::DiabeticFriendly,
        CapabilityAxis::LactoseFree,
        CapabilityAxis::GlutenFree,
    ]
    .into_iter()
    .chain(Allergen::MAJOR.into_iter().map(CapabilityAxis::AllergenFree))
}

fn capability_seeds(axis: CapabilityAxis) -> &'static [DishSeed] {
    match axis {
        CapabilityAxis::Vegetarian => capabilities::VEGETARIAN,
        CapabilityAxis::Vegan => capabilities::VEGAN,
        CapabilityAxis::Paleo => capabilities::PALEO,
        CapabilityAxis::Keto => capabilities::KETO,
        CapabilityAxis::Mediterranean => capabilities::MEDITERRANEAN,
        CapabilityAxis::Pescatarian => capabilities::PESCATARIAN,
        CapabilityAxis::Flexitarian => capabilities::FLEXITARIAN,
        CapabilityAxis::LowCarb => capabilities::LOW_CARB,
        CapabilityAxis::Halal => capabilities::HALAL,
        CapabilityAxis::Kosher => capabilities::KOSHER,
        CapabilityAxis::DiabeticFriendly => capabilities::DIABETIC_FRIENDLY,
        CapabilityAxis::LactoseFree => capabilities::LACTOSE_FREE,
        CapabilityAxis::GlutenFree => capabilities::GLUTEN_FREE,
        CapabilityAxis::AllergenFree(allergen) => match allergen {
            Allergen::Peanuts => capabilities::PEANUT_FREE,
            Allergen::TreeNuts => capabilities::TREE_NUT_FREE,
            Allergen::Milk => capabilities::MILK_FREE,
            Allergen::Eggs => capabilities::EGG_FREE,
            Allergen::Soy => capabilities::SOY_FREE,
            Allergen::Fish => capabilities::FISH_FREE,
            Allergen::Shellfish => capabilities::SHELLFISH_FREE,
            Allergen::Wheat => capabilities::WHEAT_FREE,
            Allergen::Sesame => capabilities::SESAME_FREE,
            _ => &[],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::menu::value_objects::MenuCategory;

    fn names(dishes: &[Dish]) -> Vec<&str> {
        dishes.iter().map(|d| d.name.as_str()).collect()
    }

    #[test]
    fn test_curated_cuisines_have_menus() {
        let catalog = Catalog::global();
        for cuisine in [
            Cuisine::Italian,
            Cuisine::Chinese,
            Cuisine::Indian,
            Cuisine::French,
            Cuisine::Mexican,
            Cuisine::Thai,
            Cuisine::Japanese,
            Cuisine::Romanian,
        ] {
            let menu = catalog.curated_menu(cuisine).unwrap_or_default();
            assert!(!menu.is_empty(), "{cuisine} should have a curated menu");
        }
        assert_eq!(catalog.curated_menu(Cuisine::Italian).map(<[Dish]>::len), Some(35));
        assert!(catalog.curated_menu(Cuisine::Greek).is_none());
    }

    #[test]
    fn test_uncurated_and_missing_cuisines_use_generic_menu() {
        let catalog = Catalog::global();
        assert_eq!(catalog.cuisine_menu(None), catalog.generic_menu());
        assert_eq!(catalog.cuisine_menu(Some(Cuisine::Korean)), catalog.generic_menu());
        assert_ne!(catalog.cuisine_menu(Some(Cuisine::Thai)), catalog.generic_menu());
    }

    #[test]
    fn test_common_items_span_every_specialization() {
        let catalog = Catalog::global();
        let common = catalog.common_items();

        let expected: usize = 4 + SpecializationAxis::ALL
            .into_iter()
            .map(|axis| catalog.specialization_menu(axis).len())
            .sum::<usize>();
        assert_eq!(common.len(), expected);
        assert_eq!(common.len(), 79);
        assert_eq!(
            names(&common[..4]),
            vec!["Coca Cola", "Fresh Orange Juice", "Still Water", "Coffee"]
        );
        assert_eq!(common[4].name, "Quinoa Buddha Bowl");
        assert_eq!(common[common.len() - 1].name, "Cheesecake Bites (Sugar-Free)");
    }

    #[test]
    fn test_capability_pairs() {
        let catalog = Catalog::global();
        for axis in capability_axes() {
            assert_eq!(catalog.capability_dishes(axis).len(), 2, "{axis:?}");
        }
        assert_eq!(
            names(catalog.capability_dishes(CapabilityAxis::Vegetarian)),
            vec!["Quinoa Stuffed Peppers", "Caprese Grilled Vegetable Panini"]
        );
        assert!(
            catalog
                .capability_dishes(CapabilityAxis::AllergenFree(Allergen::Mustard))
                .is_empty()
        );
    }

    #[test]
    fn test_allergen_safe_pairs_declare_their_allergen() {
        let catalog = Catalog::global();
        for allergen in Allergen::MAJOR {
            for dish in catalog.capability_dishes(CapabilityAxis::AllergenFree(allergen)) {
                assert!(dish.allergen_free.contains(&allergen), "{}", dish.name);
            }
        }
    }

    #[test]
    fn test_fallback_main_courses() {
        let fallback = Catalog::global().fallback_main_courses();
        assert_eq!(
            names(fallback),
            vec!["Grilled Chicken Breast", "Vegetable Stir Fry"]
        );
        assert!(fallback.iter().all(|d| d.category == MenuCategory::MainCourse));
        assert!(fallback.iter().all(|d| d.is_diabetic_friendly));
        assert_eq!(fallback[0].price_cents, 4599);
        assert_eq!(fallback[1].preparation_time_minutes, 15);
    }

    #[test]
    fn test_catalog_is_deterministic() {
        let first = Catalog::build();
        let second = Catalog::build();
        assert_eq!(first.common_items(), second.common_items());
        assert_eq!(first.generic_menu(), second.generic_menu());
        assert_eq!(
            first.cuisine_menu(Some(Cuisine::Indian)),
            second.cuisine_menu(Some(Cuisine::Indian))
        );
    }
}
