use std::collections::BTreeSet;

use dinesure_core::domain::{
    menu::value_objects::{Allergen, NONE_LABEL, parse_dietary_type},
    user::entities::UserProfile,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::http::server::api_entities::api_error::ApiError;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct RegisterUserValidator {
    #[validate(length(min = 3, max = 50, message = "username must be between 3 and 50 characters"))]
    pub username: String,

    #[validate(email(message = "email is not valid"))]
    pub email: String,

    #[validate(range(min = 1900, message = "birth year must be 1900 or later"))]
    pub birth_year: i32,

    #[serde(default)]
    pub profile: ProfilePayload,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProfileValidator {
    pub profile: ProfilePayload,
}

/// Wire form of a dietary profile. `"None"` is accepted as "no dietary type" and "no allergy".
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct ProfilePayload {
    pub dietary_type: Option<String>,
    pub allergies: Vec<String>,
    pub food_preferences: Vec<String>,
    pub dietary_restrictions: Vec<String>,
    pub has_diabetes: bool,
    pub is_lactose_intolerant: bool,
    pub is_gluten_free: bool,
    pub needs_puree_foods: bool,
}

impl ProfilePayload {
    pub fn into_profile(self) -> Result<UserProfile, ApiError> {
        let dietary_type = match self.dietary_type.as_deref() {
            Some(label) => {
                parse_dietary_type(label).map_err(|e| ApiError::BadRequest(e.to_string()))?
            }
            None => None,
        };

        let allergies = self
            .allergies
            .iter()
            .map(|label| label.trim())
            .filter(|label| !label.is_empty() && *label != NONE_LABEL)
            .map(|label| {
                label
                    .parse::<Allergen>()
                    .map_err(|e| ApiError::BadRequest(e.to_string()))
            })
            .collect::<Result<BTreeSet<_>, _>>()?;

        Ok(UserProfile {
            dietary_type,
            allergies,
            food_preferences: self.food_preferences,
            dietary_restrictions: self.dietary_restrictions,
            has_diabetes: self.has_diabetes,
            is_lactose_intolerant: self.is_lactose_intolerant,
            is_gluten_free: self.is_gluten_free,
            needs_puree_foods: self.needs_puree_foods,
        })
    }
}
