use std::collections::HashMap;

use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, Insert, PaginatorTrait,
    QueryFilter, QueryOrder, sea_query::OnConflict,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        favorite::{entities::FavoriteRestaurant, ports::FavoriteRepository},
        restaurant::entities::Restaurant,
    },
    entity::{
        restaurants::{Column as RestaurantColumn, Entity as RestaurantEntity},
        user_favorite_restaurants::{ActiveModel, Column, Entity},
    },
};

#[derive(Debug, Clone)]
pub struct PostgresFavoriteRepository {
    pub db: DatabaseConnection,
}

impl PostgresFavoriteRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Adding an existing pair is a no-op.
fn insert_favorite(favorite: &FavoriteRestaurant) -> Insert<ActiveModel> {
    let active_model = ActiveModel {
        user_id: Set(favorite.user_id),
        restaurant_id: Set(favorite.restaurant_id),
        created_at: Set(favorite.created_at.fixed_offset()),
    };

    Entity::insert(active_model).on_conflict(
        OnConflict::columns([Column::UserId, Column::RestaurantId])
            .do_nothing()
            .to_owned(),
    )
}

impl FavoriteRepository for PostgresFavoriteRepository {
    async fn exists(&self, user_id: Uuid, restaurant_id: Uuid) -> Result<bool, CoreError> {
        let favorite = Entity::find_by_id((user_id, restaurant_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get favorite: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(favorite.is_some())
    }

    async fn add_favorite(&self, favorite: FavoriteRestaurant) -> Result<(), CoreError> {
        insert_favorite(&favorite)
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to add favorite: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }

    async fn remove_favorite(&self, user_id: Uuid, restaurant_id: Uuid) -> Result<(), CoreError> {
        Entity::delete_by_id((user_id, restaurant_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to remove favorite: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }

    async fn list_restaurants(&self, user_id: Uuid) -> Result<Vec<Restaurant>, CoreError> {
        let favorites = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list favorites: {}", e);
                CoreError::InternalServerError
            })?;

        let ids: Vec<Uuid> = favorites.iter().map(|f| f.restaurant_id).collect();
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut restaurants: HashMap<Uuid, Restaurant> = RestaurantEntity::find()
            .filter(RestaurantColumn::Id.is_in(ids.clone()))
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to load favorite restaurants: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(|model| (model.id, Restaurant::from(model)))
            .collect();

        Ok(ids
            .into_iter()
            .filter_map(|id| restaurants.remove(&id))
            .collect())
    }

    async fn count_for_restaurant(&self, restaurant_id: Uuid) -> Result<u64, CoreError> {
        Entity::find()
            .filter(Column::RestaurantId.eq(restaurant_id))
            .count(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to count favorites: {}", e);
                CoreError::InternalServerError
            })
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DbBackend, QueryTrait};

    use super::*;

    #[test]
    fn test_duplicate_favorite_insert_does_nothing() {
        let favorite = FavoriteRestaurant::new(Uuid::new_v4(), Uuid::new_v4());
        let sql = insert_favorite(&favorite)
            .build(DbBackend::Postgres)
            .to_string();

        assert!(
            sql.ends_with(r#"ON CONFLICT ("user_id", "restaurant_id") DO NOTHING"#),
            "{sql}"
        );
    }
}
