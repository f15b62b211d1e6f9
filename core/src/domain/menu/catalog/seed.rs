use std::collections::BTreeSet;

use crate::domain::menu::{
    entities::Dish,
    value_objects::{Allergen, MenuCategory},
};

const VEGETARIAN: u16 = 1 << 0;
const VEGAN: u16 = 1 << 1;
const GLUTEN_FREE: u16 = 1 << 2;
const DIABETIC_FRIENDLY: u16 = 1 << 3;
const LACTOSE_FREE: u16 = 1 << 4;
const HALAL: u16 = 1 << 5;
const KOSHER: u16 = 1 << 6;
const PUREE_FRIENDLY: u16 = 1 << 7;

/// Compile-time description of a catalog dish.
#[derive(Debug, Clone, Copy)]
pub struct DishSeed {
    name: &'static str,
    description: &'static str,
    price_cents: u32,
    category: MenuCategory,
    flags: u16,
    allergen_free: &'static [Allergen],
    preparation_time_minutes: u32,
}

pub const fn dish(
    name: &'static str,
    description: &'static str,
    price_cents: u32,
    category: MenuCategory,
) -> DishSeed {
    DishSeed {
        name,
        description,
        price_cents,
        category,
        flags: 0,
        allergen_free: &[],
        preparation_time_minutes: 0,
    }
}

impl DishSeed {
    const fn with(mut self, flag: u16) -> Self {
        self.flags |= flag;
        self
    }

    pub const fn vegetarian(self) -> Self {
        self.with(VEGETARIAN)
    }

    pub const fn vegan(self) -> Self {
        self.with(VEGAN)
    }

    pub const fn gluten_free(self) -> Self {
        self.with(GLUTEN_FREE)
    }

    pub const fn diabetic_friendly(self) -> Self {
        self.with(DIABETIC_FRIENDLY)
    }

    pub const fn lactose_free(self) -> Self {
        self.with(LACTOSE_FREE)
    }

    pub const fn halal(self) -> Self {
        self.with(HALAL)
    }

    pub const fn kosher(self) -> Self {
        self.with(KOSHER)
    }

    pub const fn puree_friendly(self) -> Self {
        self.with(PUREE_FRIENDLY)
    }

    pub const fn free_of(mut self, allergens: &'static [Allergen]) -> Self {
        self.allergen_free = allergens;
        self
    }

    pub const fn prep_minutes(mut self, minutes: u32) -> Self {
        self.preparation_time_minutes = minutes;
        self
    }

    fn has(&self, flag: u16) -> bool {
        self.flags & flag != 0
    }

    pub fn build(&self) -> Dish {
        Dish {
            name: self.name.to_string(),
            description: self.description.to_string(),
            price_cents: self.price_cents,
            category: self.category,
            suitable_for_cuisines: BTreeSet::new(),
            dietary_types: BTreeSet::new(),
            allergen_free: self.allergen_free.iter().copied().collect(),
            is_vegetarian: self.has(VEGETARIAN),
            is_vegan: self.has(VEGAN),
            is_gluten_free: self.has(GLUTEN_FREE),
            is_diabetic_friendly: self.has(DIABETIC_FRIENDLY),
            is_lactose_free: self.has(LACTOSE_FREE),
            is_halal: self.has(HALAL),
            is_kosher: self.has(KOSHER),
            is_puree_friendly: self.has(PUREE_FRIENDLY),
            is_popular: false,
            is_special_diet: false,
            ingredients: String::new(),
            preparation_time_minutes: self.preparation_time_minutes,
        }
    }
}

pub fn build_all(seeds: &[DishSeed]) -> Vec<Dish> {
    seeds.iter().map(DishSeed::build).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_builds_flags_and_allergens() {
        const SEED: DishSeed = dish("Test", "Desc", 1250, MenuCategory::Salad)
            .vegan()
            .lactose_free()
            .free_of(&[Allergen::Milk, Allergen::Eggs]);

        let built = SEED.build();
        assert_eq!(built.name, "Test");
        assert_eq!(built.price_cents, 1250);
        assert_eq!(built.category, MenuCategory::Salad);
        assert!(built.is_vegan);
        assert!(built.is_lactose_free);
        assert!(!built.is_vegetarian);
        assert!(!built.is_gluten_free);
        assert!(built.dietary_types.is_empty());
        assert!(built.allergen_free.contains(&Allergen::Milk));
        assert!(built.allergen_free.contains(&Allergen::Eggs));
    }
}
