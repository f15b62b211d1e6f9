use super::handlers::create_review::{__path_create_review, create_review};
use super::handlers::get_restaurant::{__path_get_restaurant, get_restaurant};
use super::handlers::get_reviews::{__path_get_reviews, get_reviews};
use super::handlers::import_restaurants::{__path_import_restaurants, import_restaurants};
use super::handlers::list_restaurants::{__path_list_restaurants, list_restaurants};
use super::handlers::seed_restaurant_tags::{__path_seed_restaurant_tags, seed_restaurant_tags};
use crate::application::http::server::app_state::AppState;

use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    list_restaurants,
    get_restaurant,
    get_reviews,
    create_review,
    import_restaurants,
    seed_restaurant_tags
))]
pub struct RestaurantApiDoc;

pub fn restaurant_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{}/restaurants", root_path),
            get(list_restaurants),
        )
        .route(
            &format!("{}/restaurants/{{restaurant_id}}", root_path),
            get(get_restaurant),
        )
        .route(
            &format!("{}/restaurants/{{restaurant_id}}/reviews", root_path),
            get(get_reviews).post(create_review),
        )
        .route(
            &format!("{}/restaurants/import", root_path),
            post(import_restaurants),
        )
        .route(
            &format!("{}/restaurants/seed-tags", root_path),
            post(seed_restaurant_tags),
        )
}
