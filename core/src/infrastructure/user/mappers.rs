use tracing::warn;

use crate::{
    domain::{
        menu::value_objects::{parse_dietary_type, parse_label_set},
        user::entities::{User, UserProfile},
    },
    entity::users,
};

impl From<&users::Model> for User {
    fn from(model: &users::Model) -> Self {
        let dietary_type = model
            .dietary_type
            .as_deref()
            .map(parse_dietary_type)
            .transpose()
            .unwrap_or_else(|e| {
                warn!("Ignoring dietary type of user {}: {}", model.id, e);
                None
            })
            .flatten();

        Self {
            id: model.id,
            username: model.username.clone(),
            email: model.email.clone(),
            birth_year: model.birth_year,
            profile: UserProfile {
                dietary_type,
                allergies: parse_label_set(&model.allergies),
                food_preferences: model.food_preferences.clone(),
                dietary_restrictions: model.dietary_restrictions.clone(),
                has_diabetes: model.has_diabetes,
                is_lactose_intolerant: model.is_lactose_intolerant,
                is_gluten_free: model.is_gluten_free,
                needs_puree_foods: model.needs_puree_foods,
            },
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self::from(&model)
    }
}
