use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    menu::value_objects::{Allergen, Cuisine, DietaryType},
    restaurant::entities::RestaurantConfig,
};

pub const MAX_REVIEW_TITLE_LENGTH: usize = 100;
pub const MIN_REVIEW_COMMENT_LENGTH: usize = 10;
pub const MAX_REVIEW_COMMENT_LENGTH: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestaurantSortField {
    Name,
    Rating,
    CreatedAt,
}

impl RestaurantSortField {
    pub fn from_param(field: &str) -> Option<Self> {
        match field {
            "name" => Some(Self::Name),
            "rating" => Some(Self::Rating),
            "created_at" => Some(Self::CreatedAt),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestaurantSort {
    pub field: RestaurantSortField,
    pub descending: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantFilter {
    pub cuisine: Option<Cuisine>,
    pub dietary_type: Option<DietaryType>,
    pub allergen_free: Option<Allergen>,
    pub name_contains: Option<String>,
    /// Empty means best rated first, then by name.
    pub sort: Vec<RestaurantSort>,
    pub offset: u64,
    pub limit: u64,
}

impl Default for RestaurantFilter {
    fn default() -> Self {
        Self {
            cuisine: None,
            dietary_type: None,
            allergen_free: None,
            name_contains: None,
            sort: Vec::new(),
            offset: 0,
            limit: 20,
        }
    }
}

impl RestaurantFilter {
    pub fn effective_sort(&self) -> Vec<RestaurantSort> {
        if !self.sort.is_empty() {
            return self.sort.clone();
        }

        vec![
            RestaurantSort {
                field: RestaurantSortField::Rating,
                descending: true,
            },
            RestaurantSort {
                field: RestaurantSortField::Name,
                descending: false,
            },
        ]
    }
}

#[derive(Debug, Clone)]
pub struct CreateReviewInput {
    pub restaurant_id: Uuid,
    pub user_id: Uuid,
    pub rating: i32,
    pub title: String,
    pub comment: String,
}

impl CreateReviewInput {
    pub fn validate(&self) -> Result<(), CoreError> {
        if !(1..=5).contains(&self.rating) {
            return Err(CoreError::Invalid(
                "rating must be between 1 and 5".to_string(),
            ));
        }

        let title_length = self.title.trim().chars().count();
        if title_length == 0 || title_length > MAX_REVIEW_TITLE_LENGTH {
            return Err(CoreError::Invalid(format!(
                "title is required and cannot exceed {} characters",
                MAX_REVIEW_TITLE_LENGTH
            )));
        }

        let comment_length = self.comment.trim().chars().count();
        if !(MIN_REVIEW_COMMENT_LENGTH..=MAX_REVIEW_COMMENT_LENGTH).contains(&comment_length) {
            return Err(CoreError::Invalid(format!(
                "review must be between {} and {} characters",
                MIN_REVIEW_COMMENT_LENGTH, MAX_REVIEW_COMMENT_LENGTH
            )));
        }

        Ok(())
    }
}

/// A restaurant as reported by the map data source, before it is stored.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedRestaurant {
    pub name: String,
    pub street: Option<String>,
    pub number: Option<String>,
    pub address: String,
    pub city: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<ImportedRestaurant> for RestaurantConfig {
    fn from(imported: ImportedRestaurant) -> Self {
        Self {
            name: imported.name,
            address: imported.address,
            latitude: imported.latitude,
            longitude: imported.longitude,
            city: imported.city,
            phone: imported.phone.unwrap_or_default(),
            email: imported.email.unwrap_or_default(),
            website: imported.website.unwrap_or_default(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ImportSummary {
    pub fetched: usize,
    pub inserted: usize,
    pub skipped: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(rating: i32, title: &str, comment: &str) -> CreateReviewInput {
        CreateReviewInput {
            restaurant_id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            rating,
            title: title.to_string(),
            comment: comment.to_string(),
        }
    }

    #[test]
    fn test_review_bounds() {
        assert!(review(5, "Great", "Lovely dinner with friends").validate().is_ok());
        assert!(review(0, "Great", "Lovely dinner with friends").validate().is_err());
        assert!(review(6, "Great", "Lovely dinner with friends").validate().is_err());
        assert!(review(3, "", "Lovely dinner with friends").validate().is_err());
        assert!(review(3, &"t".repeat(101), "Lovely dinner").validate().is_err());
        assert!(review(3, "Meh", "Too short").validate().is_err());
        assert!(review(3, "Meh", &"c".repeat(1001)).validate().is_err());
        assert!(review(3, "Meh", &"c".repeat(1000)).validate().is_ok());
    }

    #[test]
    fn test_default_sort_is_rating_then_name() {
        let sort = RestaurantFilter::default().effective_sort();
        assert_eq!(sort[0].field, RestaurantSortField::Rating);
        assert!(sort[0].descending);
        assert_eq!(sort[1].field, RestaurantSortField::Name);
    }

    #[test]
    fn test_imported_restaurant_becomes_config() {
        let config = RestaurantConfig::from(ImportedRestaurant {
            name: "Hanu' lui Manuc".to_string(),
            street: Some("Strada Franceză".to_string()),
            number: Some("62-64".to_string()),
            address: "Strada Franceză 62-64".to_string(),
            city: "Bucharest".to_string(),
            phone: None,
            email: Some("contact@hanu.ro".to_string()),
            website: None,
            latitude: 44.43,
            longitude: 26.1,
        });

        assert_eq!(config.address, "Strada Franceză 62-64");
        assert_eq!(config.phone, "");
        assert_eq!(config.email, "contact@hanu.ro");
        assert!(config.cuisines.is_empty());
    }
}
