use crate::domain::{
    menu::entities::Dish,
    user::entities::{
        RESTRICTION_HALAL, RESTRICTION_KOSHER, RESTRICTION_VEGAN, RESTRICTION_VEGETARIAN,
        UserProfile,
    },
};

pub const TAG_SEPARATOR: &str = " • ";
pub const PUREE_FRIENDLY_TAG: &str = "🥤 Puree-friendly";
pub const GLUTEN_FREE_TAG: &str = "🌾 Gluten-free";
pub const LACTOSE_FREE_TAG: &str = "🥛 Lactose-free";
pub const DIABETIC_FRIENDLY_TAG: &str = "💚 Diabetic-friendly";

/// Whether a dish may be shown to a user. Anonymous visitors see everything.
pub fn is_suitable(dish: &Dish, user: Option<&UserProfile>) -> bool {
    let Some(user) = user else {
        return true;
    };

    if let Some(dietary_type) = user.dietary_type
        && !dish.dietary_types.is_empty()
        && !dish.dietary_types.contains(&dietary_type)
    {
        return false;
    }

    if !user
        .allergies
        .iter()
        .all(|allergen| dish.allergen_free.contains(allergen))
    {
        return false;
    }

    let health_needs = [
        (user.has_diabetes, dish.is_diabetic_friendly),
        (user.is_lactose_intolerant, dish.is_lactose_free),
        (user.is_gluten_free, dish.is_gluten_free),
        (user.needs_puree_foods, dish.is_puree_friendly),
    ];
    if health_needs.iter().any(|(needed, offered)| *needed && !*offered) {
        return false;
    }

    let restrictions = [
        (RESTRICTION_VEGETARIAN, dish.is_vegetarian),
        (RESTRICTION_VEGAN, dish.is_vegan),
        (RESTRICTION_HALAL, dish.is_halal),
        (RESTRICTION_KOSHER, dish.is_kosher),
    ];
    !restrictions
        .iter()
        .any(|(label, offered)| !*offered && user.has_restriction(label))
}

/// Copy of a dish whose description lists the matched health needs.
pub fn personalize(dish: &Dish, user: Option<&UserProfile>) -> Dish {
    let mut personalized = dish.clone();

    let Some(user) = user else {
        return personalized;
    };

    let tags: Vec<&str> = [
        (user.needs_puree_foods && dish.is_puree_friendly, PUREE_FRIENDLY_TAG),
        (user.is_gluten_free && dish.is_gluten_free, GLUTEN_FREE_TAG),
        (user.is_lactose_intolerant && dish.is_lactose_free, LACTOSE_FREE_TAG),
        (user.has_diabetes && dish.is_diabetic_friendly, DIABETIC_FRIENDLY_TAG),
    ]
    .into_iter()
    .filter_map(|(applies, tag)| applies.then_some(tag))
    .collect();

    if !tags.is_empty() {
        personalized.description.push_str(TAG_SEPARATOR);
        personalized.description.push_str(&tags.join(TAG_SEPARATOR));
    }

    personalized
}

/// Keeps the suitable dishes of a pool, in order, as personalized copies.
pub fn filter_and_personalize(pool: &[&Dish], user: Option<&UserProfile>) -> Vec<Dish> {
    pool.iter()
        .filter(|dish| is_suitable(dish, user))
        .map(|dish| personalize(dish, user))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::domain::menu::value_objects::{Allergen, DietaryType, MenuCategory};

    fn plain_dish(name: &str) -> Dish {
        Dish {
            name: name.to_string(),
            description: "House special".to_string(),
            price_cents: 1500,
            category: MenuCategory::MainCourse,
            suitable_for_cuisines: BTreeSet::new(),
            dietary_types: BTreeSet::new(),
            allergen_free: BTreeSet::new(),
            is_vegetarian: false,
            is_vegan: false,
            is_gluten_free: false,
            is_diabetic_friendly: false,
            is_lactose_free: false,
            is_halal: false,
            is_kosher: false,
            is_puree_friendly: false,
            is_popular: false,
            is_special_diet: false,
            ingredients: String::new(),
            preparation_time_minutes: 0,
        }
    }

    #[test]
    fn test_anonymous_visitors_see_every_dish() {
        let mut dish = plain_dish("Anything");
        dish.dietary_types.insert(DietaryType::Keto);
        assert!(is_suitable(&dish, None));
        assert_eq!(personalize(&dish, None), dish);
    }

    #[test]
    fn test_empty_profile_accepts_every_dish() {
        assert!(is_suitable(&plain_dish("Anything"), Some(&UserProfile::default())));
    }

    #[test]
    fn test_dietary_type_only_checked_against_declared_types() {
        let user = UserProfile {
            dietary_type: Some(DietaryType::Keto),
            ..Default::default()
        };

        let unrestricted = plain_dish("Unrestricted");
        assert!(is_suitable(&unrestricted, Some(&user)));

        let mut paleo = plain_dish("Paleo only");
        paleo.dietary_types.insert(DietaryType::Paleo);
        assert!(!is_suitable(&paleo, Some(&user)));

        paleo.dietary_types.insert(DietaryType::Keto);
        assert!(is_suitable(&paleo, Some(&user)));
    }

    #[test]
    fn test_allergy_requires_explicit_guarantee() {
        let user = UserProfile {
            allergies: BTreeSet::from([Allergen::Milk]),
            ..Default::default()
        };

        let mut eggs_only = plain_dish("Egg-free");
        eggs_only.allergen_free.insert(Allergen::Eggs);
        assert!(!is_suitable(&eggs_only, Some(&user)));
        assert!(!is_suitable(&plain_dish("No guarantee"), Some(&user)));

        eggs_only.allergen_free.insert(Allergen::Milk);
        assert!(is_suitable(&eggs_only, Some(&user)));
    }

    #[test]
    fn test_every_allergy_must_be_covered() {
        let user = UserProfile {
            allergies: BTreeSet::from([Allergen::Milk, Allergen::Soy]),
            ..Default::default()
        };

        let mut dish = plain_dish("Milk-free");
        dish.allergen_free.insert(Allergen::Milk);
        assert!(!is_suitable(&dish, Some(&user)));
    }

    #[test]
    fn test_health_flags() {
        let diabetic = UserProfile {
            has_diabetes: true,
            ..Default::default()
        };
        let puree = UserProfile {
            needs_puree_foods: true,
            ..Default::default()
        };

        let mut dish = plain_dish("Soup");
        assert!(!is_suitable(&dish, Some(&diabetic)));
        assert!(!is_suitable(&dish, Some(&puree)));

        dish.is_diabetic_friendly = true;
        assert!(is_suitable(&dish, Some(&diabetic)));
        assert!(!is_suitable(&dish, Some(&puree)));
    }

    #[test]
    fn test_vegan_label_excludes_non_vegan_dishes() {
        let user = UserProfile {
            dietary_restrictions: vec!["Vegan".to_string()],
            ..Default::default()
        };

        let mut dish = plain_dish("Everything but vegan");
        dish.is_vegetarian = true;
        dish.is_gluten_free = true;
        dish.is_halal = true;
        dish.is_kosher = true;
        assert!(!is_suitable(&dish, Some(&user)));

        dish.is_vegan = true;
        assert!(is_suitable(&dish, Some(&user)));
    }

    #[test]
    fn test_restriction_labels_are_case_sensitive() {
        let user = UserProfile {
            dietary_restrictions: vec!["vegan".to_string(), "No spicy food".to_string()],
            ..Default::default()
        };
        assert!(is_suitable(&plain_dish("Chili"), Some(&user)));
    }

    #[test]
    fn test_annotation_lists_matched_needs_in_fixed_order() {
        let user = UserProfile {
            has_diabetes: true,
            is_gluten_free: true,
            needs_puree_foods: true,
            is_lactose_intolerant: false,
            ..Default::default()
        };

        let mut dish = plain_dish("Velouté");
        dish.is_diabetic_friendly = true;
        dish.is_gluten_free = true;
        dish.is_puree_friendly = true;
        dish.is_lactose_free = true;

        let personalized = personalize(&dish, Some(&user));
        assert_eq!(
            personalized.description,
            "House special • 🥤 Puree-friendly • 🌾 Gluten-free • 💚 Diabetic-friendly"
        );
        assert_eq!(personalized.name, dish.name);
        assert_eq!(personalized.price_cents, dish.price_cents);
    }

    #[test]
    fn test_no_annotation_without_matches() {
        let user = UserProfile {
            is_lactose_intolerant: true,
            ..Default::default()
        };
        let dish = plain_dish("Steak");
        assert_eq!(personalize(&dish, Some(&user)).description, "House special");
    }

    #[test]
    fn test_filter_keeps_input_order() {
        let user = UserProfile {
            is_gluten_free: true,
            ..Default::default()
        };
        let mut first = plain_dish("B");
        first.is_gluten_free = true;
        let excluded = plain_dish("Bread");
        let mut second = plain_dish("A");
        second.is_gluten_free = true;

        let kept = filter_and_personalize(&[&first, &excluded, &second], Some(&user));
        let names: Vec<&str> = kept.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A"]);
        assert!(kept.iter().all(|d| d.description.ends_with(GLUTEN_FREE_TAG)));
    }
}
