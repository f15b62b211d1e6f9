use std::str::FromStr;

use axum::extract::State;
use dinesure_core::domain::restaurant::{
    entities::Restaurant,
    ports::RestaurantService,
    value_objects::{RestaurantFilter, RestaurantSort, RestaurantSortField},
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::application::http::{
    query_extractor::QueryParamsExtractor,
    query_params::{FilterOperator, QueryParams, SortDirection},
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

/// Documents the supported `filter[..]` keys; parsing goes through [`QueryParamsExtractor`].
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListRestaurantsQuery {
    /// Cuisine label, e.g. `Italian`.
    #[param(rename = "filter[cuisine]")]
    pub cuisine: Option<String>,
    #[param(rename = "filter[dietary_type]")]
    pub dietary_type: Option<String>,
    /// Allergen the restaurant guarantees to avoid, e.g. `Peanuts`.
    #[param(rename = "filter[allergen_free]")]
    pub allergen_free: Option<String>,
    #[param(rename = "filter[name][ilike]")]
    pub name: Option<String>,
    /// Comma separated fields among `name`, `rating`, `created_at`; prefix with `-` for descending.
    pub sort: Option<String>,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ListRestaurantsResponse {
    pub data: Vec<Restaurant>,
    pub offset: u64,
    pub limit: u64,
}

fn parse_label<T: FromStr>(query: &QueryParams, field: &str) -> Result<Option<T>, ApiError>
where
    T::Err: ToString,
{
    query
        .filter
        .value(field, FilterOperator::Eq)
        .map(|label| label.trim().parse::<T>())
        .transpose()
        .map_err(|e| ApiError::BadRequest(e.to_string()))
}

pub fn restaurant_filter(query: &QueryParams) -> Result<RestaurantFilter, ApiError> {
    let sort = query
        .sort
        .sorts
        .iter()
        .map(|spec| {
            RestaurantSortField::from_param(&spec.field)
                .map(|field| RestaurantSort {
                    field,
                    descending: spec.direction == SortDirection::Desc,
                })
                .ok_or_else(|| ApiError::BadRequest(format!("cannot sort by {}", spec.field)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(RestaurantFilter {
        cuisine: parse_label(query, "cuisine")?,
        dietary_type: parse_label(query, "dietary_type")?,
        allergen_free: parse_label(query, "allergen_free")?,
        name_contains: query
            .filter
            .value("name", FilterOperator::Ilike)
            .map(str::to_string),
        sort,
        offset: query.pagination.offset,
        limit: query.pagination.limit,
    })
}

#[utoipa::path(
    get,
    path = "",
    tag = "restaurant",
    summary = "List restaurants",
    description = "Lists active restaurants with optional cuisine, dietary and allergen filters. Defaults to best rated first.",
    params(ListRestaurantsQuery),
    responses(
        (status = 200, body = ListRestaurantsResponse),
        (status = 400, description = "Unknown filter label or sort field")
    )
)]
pub async fn list_restaurants(
    State(state): State<AppState>,
    QueryParamsExtractor(query): QueryParamsExtractor,
) -> Result<Response<ListRestaurantsResponse>, ApiError> {
    let filter = restaurant_filter(&query)?;
    let (offset, limit) = (filter.offset, filter.limit);

    let restaurants = state
        .service
        .list_restaurants(filter)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ListRestaurantsResponse {
        data: restaurants,
        offset,
        limit,
    }))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use dinesure_core::domain::menu::value_objects::{Allergen, Cuisine, DietaryType};

    use super::*;

    fn query(pairs: &[(&str, &str)]) -> QueryParams {
        let map = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        QueryParams::from_query_map(&map)
    }

    #[test]
    fn test_filter_labels_are_parsed() {
        let filter = restaurant_filter(&query(&[
            ("filter[cuisine]", "Italian"),
            ("filter[dietary_type]", "Vegan"),
            ("filter[allergen_free]", "Peanuts"),
            ("filter[name][ilike]", "trattoria"),
            ("sort", "-rating,name"),
            ("limit", "5"),
        ]))
        .expect("filter");

        assert_eq!(filter.cuisine, Some(Cuisine::Italian));
        assert_eq!(filter.dietary_type, Some(DietaryType::Vegan));
        assert_eq!(filter.allergen_free, Some(Allergen::Peanuts));
        assert_eq!(filter.name_contains.as_deref(), Some("trattoria"));
        assert_eq!(
            filter.sort,
            vec![
                RestaurantSort {
                    field: RestaurantSortField::Rating,
                    descending: true,
                },
                RestaurantSort {
                    field: RestaurantSortField::Name,
                    descending: false,
                },
            ]
        );
        assert_eq!(filter.limit, 5);
    }

    #[test]
    fn test_empty_query_uses_defaults() {
        let filter = restaurant_filter(&QueryParams::default()).expect("filter");
        assert_eq!(filter, RestaurantFilter::default());
    }

    #[test]
    fn test_unknown_values_are_rejected() {
        assert!(matches!(
            restaurant_filter(&query(&[("filter[cuisine]", "Martian")])),
            Err(ApiError::BadRequest(_))
        ));
        assert!(matches!(
            restaurant_filter(&query(&[("sort", "-phone")])),
            Err(ApiError::BadRequest(_))
        ));
    }
}
