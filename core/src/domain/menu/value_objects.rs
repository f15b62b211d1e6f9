use std::{collections::BTreeSet, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::warn;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::{entities::app_errors::CoreError, labels::labelled_enum};

/// Label stored by older records to mean "no restriction". It never maps to a variant.
pub const NONE_LABEL: &str = "None";

labelled_enum! {
    Cuisine, "cuisine" {
        Romanian, Italian, French, Chinese, Japanese, Indian, Thai, Mexican, Greek, Turkish,
        Lebanese, American, British, German, Spanish, Vietnamese, Korean, Mediterranean,
        Seafood, Steakhouse, Barbecue, Pizza, FastFood, Cafe, Bakery, Desserts, International,
        Fusion, StreetFood, Buffet, Vegan, Organic, Sushi, Ramen, Tapas, Bistro, BurgerBar,
        WineBar, SportsBar, FamilyDining,
    }
}

labelled_enum! {
    DietaryType, "dietary type" {
        Vegetarian, Vegan, Pescatarian, FlexitarianMostlyPlantBased, Paleo, Keto,
        Mediterranean, DairyFree, LowCarb, Halal, Kosher,
    }
}

labelled_enum! {
    Allergen, "allergen" {
        Peanuts, TreeNuts, Milk, Eggs, Soy, Fish, Shellfish, Wheat, Sesame, Mustard, Celery,
        Lupin, Molluscs, Sulphites, Corn, Berries, Citrus, Chocolate, Garlic, Onion, Avocado,
        Mushrooms, Tomatoes, Strawberries, Pineapple, Mango, Kiwi, Melon, Sunflower, Poppy,
        Coconut,
    }
}

labelled_enum! {
    /// Display category of a dish. Declaration order is the presentation order.
    MenuCategory, "menu category" {
        Appetizer, Soup, Salad, MainCourse, SideDish, Dessert, Beverage, Alcohol, Special,
    }
}

impl Allergen {
    /// Allergens that restaurants can back with dedicated allergen-safe dishes.
    pub const MAJOR: [Allergen; 9] = [
        Allergen::Peanuts,
        Allergen::TreeNuts,
        Allergen::Milk,
        Allergen::Eggs,
        Allergen::Soy,
        Allergen::Fish,
        Allergen::Shellfish,
        Allergen::Wheat,
        Allergen::Sesame,
    ];
}

/// Parses a single dietary type label, mapping the `None` sentinel and blanks to absence.
pub fn parse_dietary_type(label: &str) -> Result<Option<DietaryType>, CoreError> {
    let label = label.trim();
    if label.is_empty() || label == NONE_LABEL {
        return Ok(None);
    }

    label.parse().map(Some)
}

/// Parses a list of labels into a set, dropping sentinels and unknown values.
pub fn parse_label_set<T, I, S>(labels: I) -> BTreeSet<T>
where
    T: FromStr<Err = CoreError> + Ord,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    labels
        .into_iter()
        .filter_map(|label| {
            let label = label.as_ref().trim();
            if label.is_empty() || label == NONE_LABEL {
                return None;
            }
            match label.parse::<T>() {
                Ok(value) => Some(value),
                Err(e) => {
                    warn!("Dropping unrecognised label: {}", e);
                    None
                }
            }
        })
        .collect()
}

/// Parses an ordered list of labels, keeping the first occurrence of each value.
pub fn parse_label_list<T, I, S>(labels: I) -> Vec<T>
where
    T: FromStr<Err = CoreError> + PartialEq,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut values: Vec<T> = Vec::new();
    for label in labels {
        let label = label.as_ref().trim();
        if label.is_empty() || label == NONE_LABEL {
            continue;
        }
        match label.parse::<T>() {
            Ok(value) if !values.contains(&value) => values.push(value),
            Ok(_) => {}
            Err(e) => warn!("Dropping unrecognised label: {}", e),
        }
    }
    values
}

/// One entry of the global specialization library, in the order common items list them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum SpecializationAxis {
    Vegetarian,
    Vegan,
    GlutenFree,
    DiabeticFriendly,
    LactoseFree,
    Halal,
    Kosher,
    PureeFriendly,
    AllergenFree,
    Paleo,
    Keto,
    Mediterranean,
    LowCarb,
}

impl SpecializationAxis {
    pub const ALL: [SpecializationAxis; 13] = [
        SpecializationAxis::Vegetarian,
        SpecializationAxis::Vegan,
        SpecializationAxis::GlutenFree,
        SpecializationAxis::DiabeticFriendly,
        SpecializationAxis::LactoseFree,
        SpecializationAxis::Halal,
        SpecializationAxis::Kosher,
        SpecializationAxis::PureeFriendly,
        SpecializationAxis::AllergenFree,
        SpecializationAxis::Paleo,
        SpecializationAxis::Keto,
        SpecializationAxis::Mediterranean,
        SpecializationAxis::LowCarb,
    ];
}

/// A restaurant attribute that contributes a dedicated pair of dishes when declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CapabilityAxis {
    Vegetarian,
    Vegan,
    Paleo,
    Keto,
    Mediterranean,
    Pescatarian,
    Flexitarian,
    LowCarb,
    Halal,
    Kosher,
    DiabeticFriendly,
    LactoseFree,
    GlutenFree,
    AllergenFree(Allergen),
}

impl CapabilityAxis {
    /// Declared dietary types that carry their own dishes, in contribution order.
    pub const DIETARY_TYPES: [(DietaryType, CapabilityAxis); 6] = [
        (DietaryType::Paleo, CapabilityAxis::Paleo),
        (DietaryType::Keto, CapabilityAxis::Keto),
        (DietaryType::Mediterranean, CapabilityAxis::Mediterranean),
        (DietaryType::Pescatarian, CapabilityAxis::Pescatarian),
        (
            DietaryType::FlexitarianMostlyPlantBased,
            CapabilityAxis::Flexitarian,
        ),
        (DietaryType::LowCarb, CapabilityAxis::LowCarb),
    ];
}

/// Capabilities a restaurant declares. Input of the candidate pool assembly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RestaurantCapabilities {
    /// Ordered; the first entry is the primary cuisine.
    pub cuisines: Vec<Cuisine>,
    pub dietary_types: BTreeSet<DietaryType>,
    pub allergen_free: BTreeSet<Allergen>,
    pub has_vegetarian_options: bool,
    pub has_vegan_options: bool,
    pub has_gluten_free_options: bool,
    pub has_diabetic_friendly_options: bool,
    pub has_lactose_free_options: bool,
    pub has_halal_options: bool,
    pub has_kosher_options: bool,
}

impl RestaurantCapabilities {
    pub fn primary_cuisine(&self) -> Option<Cuisine> {
        self.cuisines.first().copied()
    }

    /// Declared capability axes in contribution order: option flags and dietary types,
    /// then health flags, then allergen-free guarantees.
    pub fn declared_axes(&self) -> Vec<CapabilityAxis> {
        let mut axes = Vec::new();

        if self.has_vegetarian_options {
            axes.push(CapabilityAxis::Vegetarian);
        }
        if self.has_vegan_options {
            axes.push(CapabilityAxis::Vegan);
        }
        for (dietary_type, axis) in CapabilityAxis::DIETARY_TYPES {
            if self.dietary_types.contains(&dietary_type) {
                axes.push(axis);
            }
        }
        if self.has_halal_options {
            axes.push(CapabilityAxis::Halal);
        }
        if self.has_kosher_options {
            axes.push(CapabilityAxis::Kosher);
        }
        if self.has_diabetic_friendly_options {
            axes.push(CapabilityAxis::DiabeticFriendly);
        }
        if self.has_lactose_free_options {
            axes.push(CapabilityAxis::LactoseFree);
        }
        if self.has_gluten_free_options {
            axes.push(CapabilityAxis::GlutenFree);
        }
        for allergen in Allergen::MAJOR {
            if self.allergen_free.contains(&allergen) {
                axes.push(CapabilityAxis::AllergenFree(allergen));
            }
        }

        axes
    }
}

#[derive(Debug, Clone)]
pub struct GenerateRestaurantMenuInput {
    pub restaurant_id: Uuid,
    pub user_id: Option<Uuid>,
}

#[derive(Debug, Clone)]
pub struct GenerateCuisineMenuInput {
    pub cuisines: Vec<Cuisine>,
    pub user_id: Option<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip_through_display() {
        assert_eq!(
            "FlexitarianMostlyPlantBased".parse::<DietaryType>(),
            Ok(DietaryType::FlexitarianMostlyPlantBased)
        );
        assert_eq!(Cuisine::FamilyDining.to_string(), "FamilyDining");
        assert_eq!(Cuisine::ALL.len(), 40);
        assert_eq!(Allergen::ALL.len(), 31);
        assert_eq!(DietaryType::ALL.len(), 11);
    }

    #[test]
    fn test_none_sentinel_is_absence() {
        assert_eq!(parse_dietary_type("None"), Ok(None));
        assert_eq!(parse_dietary_type(""), Ok(None));
        assert_eq!(parse_dietary_type("Keto"), Ok(Some(DietaryType::Keto)));
        assert!(parse_dietary_type("Carnivore").is_err());
        assert!("None".parse::<Allergen>().is_err());
    }

    #[test]
    fn test_label_set_drops_sentinel_and_unknown_values() {
        let allergies: BTreeSet<Allergen> = parse_label_set(["None", "Milk", "Gluten", " Eggs "]);
        assert_eq!(
            allergies.into_iter().collect::<Vec<_>>(),
            vec![Allergen::Milk, Allergen::Eggs]
        );
    }

    #[test]
    fn test_label_list_keeps_declaration_order() {
        let cuisines: Vec<Cuisine> = parse_label_list(["Thai", "Italian", "Klingon", "Thai"]);
        assert_eq!(cuisines, vec![Cuisine::Thai, Cuisine::Italian]);
    }

    #[test]
    fn test_declared_axes_follow_contribution_order() {
        let capabilities = RestaurantCapabilities {
            cuisines: vec![Cuisine::Greek],
            dietary_types: BTreeSet::from([
                DietaryType::LowCarb,
                DietaryType::Keto,
                DietaryType::Vegan,
            ]),
            allergen_free: BTreeSet::from([
                Allergen::Sesame,
                Allergen::Mustard,
                Allergen::Peanuts,
            ]),
            has_gluten_free_options: true,
            has_vegetarian_options: true,
            has_halal_options: true,
            ..Default::default()
        };

        assert_eq!(
            capabilities.declared_axes(),
            vec![
                CapabilityAxis::Vegetarian,
                CapabilityAxis::Keto,
                CapabilityAxis::LowCarb,
                CapabilityAxis::Halal,
                CapabilityAxis::GlutenFree,
                CapabilityAxis::AllergenFree(Allergen::Peanuts),
                CapabilityAxis::AllergenFree(Allergen::Sesame),
            ]
        );
        assert_eq!(capabilities.primary_cuisine(), Some(Cuisine::Greek));
        assert_eq!(RestaurantCapabilities::default().primary_cuisine(), None);
    }

    #[test]
    fn test_category_order_matches_declaration() {
        assert!(MenuCategory::Appetizer < MenuCategory::Soup);
        assert!(MenuCategory::MainCourse < MenuCategory::SideDish);
        assert!(MenuCategory::Beverage < MenuCategory::Alcohol);
        assert!(MenuCategory::Alcohol < MenuCategory::Special);
    }
}
