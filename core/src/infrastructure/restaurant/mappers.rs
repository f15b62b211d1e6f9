use std::fmt::Display;

use crate::{
    domain::{
        menu::value_objects::{parse_label_list, parse_label_set},
        restaurant::entities::{Restaurant, RestaurantReview},
    },
    entity::{restaurant_reviews, restaurants},
};

pub fn to_labels<'a, T, I>(values: I) -> Vec<String>
where
    T: Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    values.into_iter().map(|v| v.to_string()).collect()
}

impl From<&restaurants::Model> for Restaurant {
    fn from(model: &restaurants::Model) -> Self {
        Self {
            id: model.id,
            name: model.name.clone(),
            description: model.description.clone(),
            address: model.address.clone(),
            latitude: model.latitude,
            longitude: model.longitude,
            city: model.city.clone(),
            county: model.county.clone(),
            phone: model.phone.clone(),
            email: model.email.clone(),
            website: model.website.clone(),
            rating: model.rating,
            price_range: model.price_range.clone(),
            cuisines: parse_label_list(&model.cuisines),
            dietary_types: parse_label_set(&model.dietary_types),
            allergen_free: parse_label_set(&model.allergen_free),
            has_vegetarian_options: model.has_vegetarian_options,
            has_vegan_options: model.has_vegan_options,
            has_gluten_free_options: model.has_gluten_free_options,
            has_diabetic_friendly_options: model.has_diabetic_friendly_options,
            has_lactose_free_options: model.has_lactose_free_options,
            has_halal_options: model.has_halal_options,
            has_kosher_options: model.has_kosher_options,
            opening_hours: model.opening_hours.clone(),
            is_active: model.is_active,
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<restaurants::Model> for Restaurant {
    fn from(model: restaurants::Model) -> Self {
        Self::from(&model)
    }
}

impl From<&restaurant_reviews::Model> for RestaurantReview {
    fn from(model: &restaurant_reviews::Model) -> Self {
        Self {
            id: model.id,
            restaurant_id: model.restaurant_id,
            user_id: model.user_id,
            rating: model.rating,
            title: model.title.clone(),
            comment: model.comment.clone(),
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<restaurant_reviews::Model> for RestaurantReview {
    fn from(model: restaurant_reviews::Model) -> Self {
        Self::from(&model)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;
    use crate::domain::menu::value_objects::{Allergen, Cuisine, DietaryType};

    fn model() -> restaurants::Model {
        let now = Utc::now().fixed_offset();
        restaurants::Model {
            id: Uuid::new_v4(),
            name: "Trattoria".to_string(),
            description: String::new(),
            address: "Calea Victoriei 1".to_string(),
            latitude: 44.43,
            longitude: 26.1,
            city: "Bucharest".to_string(),
            county: String::new(),
            phone: String::new(),
            email: String::new(),
            website: String::new(),
            rating: 4.5,
            price_range: "€€".to_string(),
            cuisines: vec![
                "Italian".to_string(),
                "Pizzeria".to_string(),
                "Mediterranean".to_string(),
            ],
            dietary_types: vec!["None".to_string(), "Vegan".to_string()],
            allergen_free: vec!["Milk".to_string(), "None".to_string()],
            has_vegetarian_options: true,
            has_vegan_options: true,
            has_gluten_free_options: false,
            has_diabetic_friendly_options: false,
            has_lactose_free_options: false,
            has_halal_options: false,
            has_kosher_options: false,
            opening_hours: "12:00-23:00".to_string(),
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_unknown_labels_and_sentinels_are_dropped() {
        let restaurant = Restaurant::from(model());

        assert_eq!(
            restaurant.cuisines,
            vec![Cuisine::Italian, Cuisine::Mediterranean]
        );
        assert_eq!(
            restaurant.dietary_types.into_iter().collect::<Vec<_>>(),
            vec![DietaryType::Vegan]
        );
        assert_eq!(
            restaurant.allergen_free.into_iter().collect::<Vec<_>>(),
            vec![Allergen::Milk]
        );
    }

    #[test]
    fn test_labels_are_written_by_name() {
        let restaurant = Restaurant::from(model());
        assert_eq!(
            to_labels(&restaurant.cuisines),
            vec!["Italian".to_string(), "Mediterranean".to_string()]
        );
    }
}
