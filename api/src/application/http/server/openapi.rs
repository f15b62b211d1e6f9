use crate::application::http::{
    favorite::router::FavoriteApiDoc, health::HealthApiDoc, menu::router::MenuApiDoc,
    reservation::router::ReservationApiDoc, restaurant::router::RestaurantApiDoc,
    server::config::__path_get_config, user::router::UserApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "DineSure API"
    ),
    paths(get_config),
    nest(
        (path = "/restaurants", api = RestaurantApiDoc),
        (path = "/menus", api = MenuApiDoc),
        (path = "/reservations", api = ReservationApiDoc),
        (path = "/favorites", api = FavoriteApiDoc),
        (path = "/users", api = UserApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
