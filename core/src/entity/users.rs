use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    pub birth_year: i32,
    pub dietary_type: Option<String>,
    pub allergies: Vec<String>,
    pub food_preferences: Vec<String>,
    pub dietary_restrictions: Vec<String>,
    pub has_diabetes: bool,
    pub is_lactose_intolerant: bool,
    pub is_gluten_free: bool,
    pub needs_puree_foods: bool,
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
