use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "restaurants")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub address: String,
    #[sea_orm(column_type = "Double")]
    pub latitude: f64,
    #[sea_orm(column_type = "Double")]
    pub longitude: f64,
    pub city: String,
    pub county: String,
    pub phone: String,
    pub email: String,
    pub website: String,
    #[sea_orm(column_type = "Double")]
    pub rating: f64,
    pub price_range: String,
    pub cuisines: Vec<String>,
    pub dietary_types: Vec<String>,
    pub allergen_free: Vec<String>,
    pub has_vegetarian_options: bool,
    pub has_vegan_options: bool,
    pub has_gluten_free_options: bool,
    pub has_diabetic_friendly_options: bool,
    pub has_lactose_free_options: bool,
    pub has_halal_options: bool,
    pub has_kosher_options: bool,
    pub opening_hours: String,
    pub is_active: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::reservations::Entity")]
    Reservations,
    #[sea_orm(has_many = "super::restaurant_reviews::Entity")]
    RestaurantReviews,
    #[sea_orm(has_many = "super::user_favorite_restaurants::Entity")]
    UserFavoriteRestaurants,
}

impl Related<super::reservations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reservations.def()
    }
}

impl Related<super::restaurant_reviews::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RestaurantReviews.def()
    }
}

impl Related<super::user_favorite_restaurants::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserFavoriteRestaurants.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
