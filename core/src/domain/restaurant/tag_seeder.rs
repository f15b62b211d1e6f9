use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::domain::{
    menu::value_objects::{Allergen, Cuisine, DietaryType},
    restaurant::entities::Restaurant,
};

pub const TAG_SEED: u64 = 42;
pub const MAX_TAGGED_RESTAURANTS: u64 = 100;

pub const SEEDABLE_DIETARY_TYPES: [DietaryType; 7] = [
    DietaryType::Vegetarian,
    DietaryType::Vegan,
    DietaryType::Pescatarian,
    DietaryType::Paleo,
    DietaryType::Keto,
    DietaryType::Mediterranean,
    DietaryType::LowCarb,
];

pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(TAG_SEED)
}

/// Fills in missing dietary tags and allergen guarantees, then syncs the option flags.
/// Returns whether the restaurant changed.
pub fn assign_tags<G: Rng>(restaurant: &mut Restaurant, rng: &mut G) -> bool {
    let mut changed = false;

    if restaurant.dietary_types.is_empty() {
        let wanted = rng.gen_range(1..4);
        let selected = &mut restaurant.dietary_types;

        match restaurant.cuisines.first() {
            Some(Cuisine::Italian) => {
                selected.insert(DietaryType::Mediterranean);
                if rng.gen_bool(0.6) {
                    selected.insert(DietaryType::Vegetarian);
                }
            }
            Some(Cuisine::Indian) => {
                selected.insert(DietaryType::Vegetarian);
                if rng.gen_bool(0.4) {
                    selected.insert(DietaryType::Vegan);
                }
            }
            Some(Cuisine::Japanese | Cuisine::Thai) => {
                selected.insert(DietaryType::Pescatarian);
                if rng.gen_bool(0.5) {
                    selected.insert(DietaryType::LowCarb);
                }
            }
            Some(Cuisine::French) => {
                selected.insert(DietaryType::Mediterranean);
                if rng.gen_bool(0.3) {
                    selected.insert(DietaryType::Keto);
                }
            }
            _ => {}
        }

        while selected.len() < wanted {
            let pick = rng.gen_range(0..SEEDABLE_DIETARY_TYPES.len());
            selected.insert(SEEDABLE_DIETARY_TYPES[pick]);
        }
        changed = true;
    }

    if restaurant.allergen_free.is_empty() {
        let draws = rng.gen_range(1..5);
        for _ in 0..draws {
            restaurant
                .allergen_free
                .insert(Allergen::MAJOR[rng.gen_range(0..Allergen::MAJOR.len())]);
        }
        changed = true;
    }

    let derived = [
        (
            restaurant.dietary_types.contains(&DietaryType::Vegetarian),
            &mut restaurant.has_vegetarian_options,
        ),
        (
            restaurant.dietary_types.contains(&DietaryType::Vegan),
            &mut restaurant.has_vegan_options,
        ),
        (
            restaurant.allergen_free.contains(&Allergen::Milk),
            &mut restaurant.has_lactose_free_options,
        ),
        (
            restaurant.allergen_free.contains(&Allergen::Wheat),
            &mut restaurant.has_gluten_free_options,
        ),
    ];
    for (implied, flag) in derived {
        if implied && !*flag {
            *flag = true;
            changed = true;
        }
    }

    // Draw even when the flag is already set.
    let random = [
        (0.2, &mut restaurant.has_halal_options),
        (0.15, &mut restaurant.has_kosher_options),
        (0.4, &mut restaurant.has_diabetic_friendly_options),
    ];
    for (probability, flag) in random {
        if rng.gen_bool(probability) && !*flag {
            *flag = true;
            changed = true;
        }
    }

    changed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::restaurant::entities::RestaurantConfig;

    fn restaurant(cuisine: Cuisine) -> Restaurant {
        Restaurant::new(RestaurantConfig {
            name: format!("{} place", cuisine),
            cuisines: vec![cuisine],
            ..Default::default()
        })
    }

    #[test]
    fn test_untagged_restaurant_gets_tags_and_synced_flags() {
        let mut rng = seeded_rng();
        let mut italian = restaurant(Cuisine::Italian);

        assert!(assign_tags(&mut italian, &mut rng));
        assert!(italian.dietary_types.contains(&DietaryType::Mediterranean));
        assert!((1..=3).contains(&italian.dietary_types.len()));
        assert!((1..=4).contains(&italian.allergen_free.len()));
        assert!(
            italian
                .allergen_free
                .iter()
                .all(|a| Allergen::MAJOR.contains(a))
        );
        assert_eq!(
            italian.has_vegetarian_options,
            italian.dietary_types.contains(&DietaryType::Vegetarian)
        );
        assert_eq!(
            italian.has_gluten_free_options,
            italian.allergen_free.contains(&Allergen::Wheat)
        );
    }

    #[test]
    fn test_cuisine_hints() {
        let mut rng = seeded_rng();
        for (cuisine, hinted) in [
            (Cuisine::Indian, DietaryType::Vegetarian),
            (Cuisine::Japanese, DietaryType::Pescatarian),
            (Cuisine::Thai, DietaryType::Pescatarian),
            (Cuisine::French, DietaryType::Mediterranean),
        ] {
            let mut tagged = restaurant(cuisine);
            assign_tags(&mut tagged, &mut rng);
            assert!(tagged.dietary_types.contains(&hinted), "{}", cuisine);
        }
    }

    #[test]
    fn test_seeding_is_deterministic() {
        let mut first = restaurant(Cuisine::Korean);
        let mut second = first.clone();

        assign_tags(&mut first, &mut seeded_rng());
        assign_tags(&mut second, &mut seeded_rng());
        assert_eq!(first, second);
    }

    #[test]
    fn test_existing_tags_are_kept() {
        let mut tagged = restaurant(Cuisine::Italian);
        tagged.dietary_types.insert(DietaryType::Keto);
        tagged.allergen_free.insert(Allergen::Fish);
        tagged.has_halal_options = true;
        tagged.has_kosher_options = true;
        tagged.has_diabetic_friendly_options = true;

        let before = tagged.clone();
        assert!(!assign_tags(&mut tagged, &mut seeded_rng()));
        assert_eq!(tagged, before);
    }
}
