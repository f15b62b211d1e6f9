use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, Order, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Select, sea_query::Expr,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        restaurant::{
            entities::{Restaurant, RestaurantReview},
            ports::RestaurantRepository,
            value_objects::{RestaurantFilter, RestaurantSortField},
        },
    },
    entity::{
        restaurant_reviews::{
            ActiveModel as ReviewActiveModel, Column as ReviewColumn, Entity as ReviewEntity,
        },
        restaurants::{ActiveModel, Column, Entity},
    },
    infrastructure::restaurant::mappers::to_labels,
};

#[derive(Debug, Clone)]
pub struct PostgresRestaurantRepository {
    pub db: DatabaseConnection,
}

impl PostgresRestaurantRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_active_model(restaurant: &Restaurant) -> ActiveModel {
    ActiveModel {
        id: Set(restaurant.id),
        name: Set(restaurant.name.clone()),
        description: Set(restaurant.description.clone()),
        address: Set(restaurant.address.clone()),
        latitude: Set(restaurant.latitude),
        longitude: Set(restaurant.longitude),
        city: Set(restaurant.city.clone()),
        county: Set(restaurant.county.clone()),
        phone: Set(restaurant.phone.clone()),
        email: Set(restaurant.email.clone()),
        website: Set(restaurant.website.clone()),
        rating: Set(restaurant.rating),
        price_range: Set(restaurant.price_range.clone()),
        cuisines: Set(to_labels(&restaurant.cuisines)),
        dietary_types: Set(to_labels(&restaurant.dietary_types)),
        allergen_free: Set(to_labels(&restaurant.allergen_free)),
        has_vegetarian_options: Set(restaurant.has_vegetarian_options),
        has_vegan_options: Set(restaurant.has_vegan_options),
        has_gluten_free_options: Set(restaurant.has_gluten_free_options),
        has_diabetic_friendly_options: Set(restaurant.has_diabetic_friendly_options),
        has_lactose_free_options: Set(restaurant.has_lactose_free_options),
        has_halal_options: Set(restaurant.has_halal_options),
        has_kosher_options: Set(restaurant.has_kosher_options),
        opening_hours: Set(restaurant.opening_hours.clone()),
        is_active: Set(restaurant.is_active),
        created_at: Set(restaurant.created_at.fixed_offset()),
        updated_at: Set(restaurant.updated_at.fixed_offset()),
    }
}

fn sort_column(field: RestaurantSortField) -> Column {
    match field {
        RestaurantSortField::Name => Column::Name,
        RestaurantSortField::Rating => Column::Rating,
        RestaurantSortField::CreatedAt => Column::CreatedAt,
    }
}

/// Escapes LIKE wildcards in user input.
fn like_pattern(fragment: &str) -> String {
    let escaped = fragment
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

/// Same name at an address mentioning both the street and the house number.
fn similar_restaurants(name: &str, street: &str, number: &str) -> Select<Entity> {
    Entity::find()
        .filter(Column::Name.eq(name))
        .filter(Column::Address.like(like_pattern(street)))
        .filter(Column::Address.like(like_pattern(number)))
}

impl RestaurantRepository for PostgresRestaurantRepository {
    async fn list(&self, filter: RestaurantFilter) -> Result<Vec<Restaurant>, CoreError> {
        let mut query = Entity::find().filter(Column::IsActive.eq(true));

        if let Some(cuisine) = filter.cuisine {
            query = query.filter(Expr::cust_with_values(
                "$1 = ANY(cuisines)",
                [cuisine.as_str()],
            ));
        }
        if let Some(dietary_type) = filter.dietary_type {
            query = query.filter(Expr::cust_with_values(
                "$1 = ANY(dietary_types)",
                [dietary_type.as_str()],
            ));
        }
        if let Some(allergen) = filter.allergen_free {
            query = query.filter(Expr::cust_with_values(
                "$1 = ANY(allergen_free)",
                [allergen.as_str()],
            ));
        }
        if let Some(name) = filter.name_contains.as_deref().map(str::trim)
            && !name.is_empty()
        {
            query = query.filter(Expr::cust_with_values(
                "name ILIKE $1",
                [like_pattern(name)],
            ));
        }

        for sort in filter.effective_sort() {
            let order = if sort.descending {
                Order::Desc
            } else {
                Order::Asc
            };
            query = query.order_by(sort_column(sort.field), order);
        }

        let restaurants = query
            .order_by_asc(Column::Id)
            .offset(filter.offset)
            .limit(filter.limit)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list restaurants: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(restaurants.into_iter().map(Restaurant::from).collect())
    }

    async fn get_by_id(&self, restaurant_id: Uuid) -> Result<Option<Restaurant>, CoreError> {
        let restaurant = Entity::find_by_id(restaurant_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get restaurant: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(restaurant.map(Restaurant::from))
    }

    async fn list_first(&self, limit: u64) -> Result<Vec<Restaurant>, CoreError> {
        let restaurants = Entity::find()
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list restaurants for tagging: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(restaurants.into_iter().map(Restaurant::from).collect())
    }

    async fn create_restaurant(&self, restaurant: Restaurant) -> Result<Restaurant, CoreError> {
        let created = Entity::insert(to_active_model(&restaurant))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create restaurant: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Restaurant::from(created))
    }

    async fn update_restaurant(&self, restaurant: Restaurant) -> Result<Restaurant, CoreError> {
        let updated = Entity::update(to_active_model(&restaurant))
            .filter(Column::Id.eq(restaurant.id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to update restaurant: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Restaurant::from(updated))
    }

    async fn exists_similar(
        &self,
        name: String,
        street: String,
        number: String,
    ) -> Result<bool, CoreError> {
        let count = similar_restaurants(&name, &street, &number)
            .count(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to check for duplicate restaurant: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(count > 0)
    }

    async fn list_reviews(&self, restaurant_id: Uuid) -> Result<Vec<RestaurantReview>, CoreError> {
        let reviews = ReviewEntity::find()
            .filter(ReviewColumn::RestaurantId.eq(restaurant_id))
            .order_by_desc(ReviewColumn::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list restaurant reviews: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(reviews.into_iter().map(RestaurantReview::from).collect())
    }

    async fn create_review(&self, review: RestaurantReview) -> Result<RestaurantReview, CoreError> {
        let active_model = ReviewActiveModel {
            id: Set(review.id),
            restaurant_id: Set(review.restaurant_id),
            user_id: Set(review.user_id),
            rating: Set(review.rating),
            title: Set(review.title.clone()),
            comment: Set(review.comment.clone()),
            created_at: Set(review.created_at.fixed_offset()),
            updated_at: Set(review.updated_at.fixed_offset()),
        };

        let created = ReviewEntity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create restaurant review: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(RestaurantReview::from(created))
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DbBackend, QueryTrait, Value};

    use super::*;

    #[test]
    fn test_like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("caru"), "%caru%");
        assert_eq!(like_pattern("100%_vegan"), "%100\\%\\_vegan%");
    }

    #[test]
    fn test_similar_address_match_is_literal() {
        let statement = similar_restaurants("Caru' cu Bere", "Strada_Stavropoleos", "5%")
            .build(DbBackend::Postgres);
        let values = statement.values.expect("bound values").0;

        assert!(values.contains(&Value::from("%Strada\\_Stavropoleos%")));
        assert!(values.contains(&Value::from("%5\\%%")));
        assert!(!values.contains(&Value::from("%Strada_Stavropoleos%")));
    }
}
