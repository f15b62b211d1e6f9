use super::handlers::count_favorites::{__path_count_favorites, count_favorites};
use super::handlers::get_favorite_status::{__path_get_favorite_status, get_favorite_status};
use super::handlers::list_favorites::{__path_list_favorites, list_favorites};
use super::handlers::toggle_favorite::{__path_toggle_favorite, toggle_favorite};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(list_favorites, get_favorite_status, toggle_favorite, count_favorites))]
pub struct FavoriteApiDoc;

pub fn favorite_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{}/favorites/users/{{user_id}}", root_path),
            get(list_favorites),
        )
        .route(
            &format!(
                "{}/favorites/users/{{user_id}}/restaurants/{{restaurant_id}}",
                root_path
            ),
            get(get_favorite_status).post(toggle_favorite),
        )
        .route(
            &format!("{}/favorites/restaurants/{{restaurant_id}}/count", root_path),
            get(count_favorites),
        )
}
