use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::generate_timestamp,
    menu::value_objects::{Allergen, Cuisine, DietaryType, RestaurantCapabilities},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Restaurant {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub city: String,
    pub county: String,
    pub phone: String,
    pub email: String,
    pub website: String,
    pub rating: f64,
    /// One to four euro signs.
    pub price_range: String,
    /// Ordered; the first entry drives the menu.
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
    pub opening_hours: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct RestaurantConfig {
    pub name: String,
    pub description: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub city: String,
    pub county: String,
    pub phone: String,
    pub email: String,
    pub website: String,
    pub rating: f64,
    pub price_range: String,
    pub cuisines: Vec<Cuisine>,
    pub opening_hours: String,
}

impl Restaurant {
    pub fn new(config: RestaurantConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            name: config.name,
            description: config.description,
            address: config.address,
            latitude: config.latitude,
            longitude: config.longitude,
            city: config.city,
            county: config.county,
            phone: config.phone,
            email: config.email,
            website: config.website,
            rating: config.rating,
            price_range: config.price_range,
            cuisines: config.cuisines,
            dietary_types: BTreeSet::new(),
            allergen_free: BTreeSet::new(),
            has_vegetarian_options: false,
            has_vegan_options: false,
            has_gluten_free_options: false,
            has_diabetic_friendly_options: false,
            has_lactose_free_options: false,
            has_halal_options: false,
            has_kosher_options: false,
            opening_hours: config.opening_hours,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn touch(&mut self) {
        let (now, _) = generate_timestamp();
        self.updated_at = now;
    }
}

impl From<&Restaurant> for RestaurantCapabilities {
    fn from(restaurant: &Restaurant) -> Self {
        Self {
            cuisines: restaurant.cuisines.clone(),
            dietary_types: restaurant.dietary_types.clone(),
            allergen_free: restaurant.allergen_free.clone(),
            has_vegetarian_options: restaurant.has_vegetarian_options,
            has_vegan_options: restaurant.has_vegan_options,
            has_gluten_free_options: restaurant.has_gluten_free_options,
            has_diabetic_friendly_options: restaurant.has_diabetic_friendly_options,
            has_lactose_free_options: restaurant.has_lactose_free_options,
            has_halal_options: restaurant.has_halal_options,
            has_kosher_options: restaurant.has_kosher_options,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RestaurantReview {
    pub id: Uuid,
    pub restaurant_id: Uuid,
    pub user_id: Uuid,
    pub rating: i32,
    pub title: String,
    pub comment: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RestaurantReview {
    pub fn new(
        restaurant_id: Uuid,
        user_id: Uuid,
        rating: i32,
        title: String,
        comment: String,
    ) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            restaurant_id,
            user_id,
            rating,
            title,
            comment,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::menu::value_objects::CapabilityAxis;

    #[test]
    fn test_new_restaurant_is_active_without_capabilities() {
        let restaurant = Restaurant::new(RestaurantConfig {
            name: "Caru' cu bere".to_string(),
            cuisines: vec![Cuisine::Romanian],
            ..Default::default()
        });

        assert!(restaurant.is_active);
        assert!(restaurant.dietary_types.is_empty());
        assert_eq!(restaurant.created_at, restaurant.updated_at);
        assert!(
            RestaurantCapabilities::from(&restaurant)
                .declared_axes()
                .is_empty()
        );
    }

    #[test]
    fn test_capabilities_follow_restaurant_flags() {
        let mut restaurant = Restaurant::new(RestaurantConfig {
            cuisines: vec![Cuisine::Thai, Cuisine::Japanese],
            ..Default::default()
        });
        restaurant.has_kosher_options = true;
        restaurant.allergen_free.insert(Allergen::Soy);

        let capabilities = RestaurantCapabilities::from(&restaurant);
        assert_eq!(capabilities.primary_cuisine(), Some(Cuisine::Thai));
        assert_eq!(
            capabilities.declared_axes(),
            vec![
                CapabilityAxis::Kosher,
                CapabilityAxis::AllergenFree(Allergen::Soy)
            ]
        );
    }
}
