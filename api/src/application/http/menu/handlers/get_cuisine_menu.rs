use axum::extract::{Query, State};
use dinesure_core::domain::menu::{
    ports::MenuService,
    value_objects::{Cuisine, GenerateCuisineMenuInput},
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
pub struct CuisineMenuQuery {
    /// Comma separated cuisine labels, most important first. Empty selects the generic menu.
    pub cuisines: Option<String>,
    pub user_id: Option<Uuid>,
}

pub fn parse_cuisines(cuisines: Option<&str>) -> Result<Vec<Cuisine>, ApiError> {
    cuisines
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(|label| {
            label
                .parse::<Cuisine>()
                .map_err(|e| ApiError::BadRequest(e.to_string()))
        })
        .collect()
}

#[utoipa::path(
    get,
    path = "/cuisines",
    tag = "menu",
    summary = "Get menu for cuisines",
    description = "Builds a menu from a cuisine list alone, without restaurant capability dishes.",
    params(CuisineMenuQuery),
    responses(
        (status = 200, body = MenuResponse),
        (status = 400, description = "Unknown cuisine"),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_cuisine_menu(
    Query(query): Query<CuisineMenuQuery>,
    State(state): State<AppState>,
) -> Result<Response<MenuResponse>, ApiError> {
    let cuisines = parse_cuisines(query.cuisines.as_deref())?;

    let menu = state
        .service
        .generate_menu_for_user(GenerateCuisineMenuInput {
            cuisines,
            user_id: query.user_id,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(MenuResponse::from(menu)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cuisines_keep_their_order() {
        assert_eq!(
            parse_cuisines(Some("Thai, Italian")).expect("cuisines"),
            vec![Cuisine::Thai, Cuisine::Italian]
        );
    }

    #[test]
    fn test_missing_cuisines_select_the_generic_menu() {
        assert_eq!(parse_cuisines(None).expect("cuisines"), Vec::new());
        assert_eq!(parse_cuisines(Some(" , ")).expect("cuisines"), Vec::new());
    }

    #[test]
    fn test_unknown_cuisine_is_bad_request() {
        assert!(matches!(
            parse_cuisines(Some("Italian,Martian")),
            Err(ApiError::BadRequest(_))
        ));
    }
}
