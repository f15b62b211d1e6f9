use super::handlers::get_user::{__path_get_user, get_user};
use super::handlers::register_user::{__path_register_user, register_user};
use super::handlers::update_profile::{__path_update_profile, update_profile};
use crate::application::http::server::app_state::AppState;

use axum::{
    Router,
    routing::{get, post, put},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(register_user, get_user, update_profile))]
pub struct UserApiDoc;

pub fn user_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{}/users", root_path), post(register_user))
        .route(&format!("{}/users/{{user_id}}", root_path), get(get_user))
        .route(
            &format!("{}/users/{{user_id}}/profile", root_path),
            put(update_profile),
        )
}
