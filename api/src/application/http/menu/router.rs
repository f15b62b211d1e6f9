use super::handlers::get_cuisine_menu::{__path_get_cuisine_menu, get_cuisine_menu};
use super::handlers::get_restaurant_menu::{__path_get_restaurant_menu, get_restaurant_menu};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_restaurant_menu, get_cuisine_menu))]
pub struct MenuApiDoc;

pub fn menu_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{}/menus/restaurants/{{restaurant_id}}", root_path),
            get(get_restaurant_menu),
        )
        .route(
            &format!("{}/menus/cuisines", root_path),
            get(get_cuisine_menu),
        )
}
