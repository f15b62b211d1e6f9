use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FavoriteRestaurant {
    pub user_id: Uuid,
    pub restaurant_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl FavoriteRestaurant {
    pub fn new(user_id: Uuid, restaurant_id: Uuid) -> Self {
        let (now, _) = generate_timestamp();

        Self {
            user_id,
            restaurant_id,
            created_at: now,
        }
    }
}
