use chrono::{Datelike, Utc};

use crate::domain::{common::entities::app_errors::CoreError, user::entities::UserProfile};

pub const MIN_BIRTH_YEAR: i32 = 1900;

#[derive(Debug, Clone)]
pub struct RegisterUserInput {
    pub username: String,
    pub email: String,
    pub birth_year: i32,
    pub profile: UserProfile,
}

impl RegisterUserInput {
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_username(&self.username)?;
        validate_birth_year(self.birth_year, Utc::now().year())?;

        if !self.email.contains('@') {
            return Err(CoreError::Invalid("email is not valid".to_string()));
        }

        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct UpdateProfileInput {
    pub user_id: uuid::Uuid,
    pub profile: UserProfile,
}

pub fn validate_username(username: &str) -> Result<(), CoreError> {
    let length = username.chars().count();
    if !(3..=50).contains(&length) {
        return Err(CoreError::Invalid(
            "username must be between 3 and 50 characters".to_string(),
        ));
    }

    if !username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(CoreError::Invalid(
            "username can only contain letters, numbers, underscores, and hyphens".to_string(),
        ));
    }

    Ok(())
}

pub fn validate_birth_year(birth_year: i32, current_year: i32) -> Result<(), CoreError> {
    if !(MIN_BIRTH_YEAR..=current_year).contains(&birth_year) {
        return Err(CoreError::Invalid(format!(
            "birth year must be between {} and {}",
            MIN_BIRTH_YEAR, current_year
        )));
    }

    Ok(())
}
