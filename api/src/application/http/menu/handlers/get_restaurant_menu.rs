use axum::extract::{Path, Query, State};
use dinesure_core::domain::menu::{
    ports::MenuService, value_objects::GenerateRestaurantMenuInput,
};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use super::MenuResponse;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct RestaurantMenuQuery {
    /// Personalize the menu for this user's dietary profile.
    pub user_id: Option<Uuid>,
}

#[utoipa::path(
    get,
    path = "/restaurants/{restaurant_id}",
    tag = "menu",
    summary = "Get restaurant menu",
    description = "Builds the menu of a restaurant from its cuisines and dietary capabilities, filtered for the user when one is given.",
    params(
        ("restaurant_id" = Uuid, Path, description = "Restaurant ID"),
        RestaurantMenuQuery
    ),
    responses(
        (status = 200, body = MenuResponse),
        (status = 404, description = "Restaurant or user not found")
    )
)]
pub async fn get_restaurant_menu(
    Path(restaurant_id): Path<Uuid>,
    Query(query): Query<RestaurantMenuQuery>,
    State(state): State<AppState>,
) -> Result<Response<MenuResponse>, ApiError> {
    let menu = state
        .service
        .generate_menu_for_restaurant(GenerateRestaurantMenuInput {
            restaurant_id,
            user_id: query.user_id,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(MenuResponse::from(menu)))
}
