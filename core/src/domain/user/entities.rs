use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::generate_timestamp,
    menu::value_objects::{Allergen, DietaryType},
};

/// Free-text dietary restriction labels that the menu filter recognises. Matching is exact.
pub const RESTRICTION_VEGETARIAN: &str = "Vegetarian";
pub const RESTRICTION_VEGAN: &str = "Vegan";
pub const RESTRICTION_HALAL: &str = "Halal";
pub const RESTRICTION_KOSHER: &str = "Kosher";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub birth_year: i32,
    pub profile: UserProfile,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Dietary, allergy and health profile used to personalize menus.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserProfile {
    /// `None` means no declared dietary type.
    pub dietary_type: Option<DietaryType>,
    pub allergies: BTreeSet<Allergen>,
    pub food_preferences: Vec<String>,
    pub dietary_restrictions: Vec<String>,
    pub has_diabetes: bool,
    pub is_lactose_intolerant: bool,
    pub is_gluten_free: bool,
    pub needs_puree_foods: bool,
}

impl UserProfile {
    pub fn has_restriction(&self, label: &str) -> bool {
        self.dietary_restrictions.iter().any(|r| r == label)
    }
}

#[derive(Debug, Clone)]
pub struct UserConfig {
    pub username: String,
    pub email: String,
    pub birth_year: i32,
    pub profile: UserProfile,
}

impl User {
    pub fn new(config: UserConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            username: config.username,
            email: config.email,
            birth_year: config.birth_year,
            profile: config.profile,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update_profile(&mut self, profile: UserProfile) {
        let (now, _) = generate_timestamp();

        self.profile = profile;
        self.updated_at = now;
    }
}
