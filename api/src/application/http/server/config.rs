use axum::extract::State;
use dinesure_core::domain::reservation::value_objects::ReservationPolicy;
use serde::Serialize;
use utoipa::ToSchema;

use crate::args::Environment;

use super::{api_entities::response::Response, app_state::AppState};

#[derive(Debug, Serialize, PartialEq, ToSchema)]
pub struct GetConfigResponse {
    pub environment: Environment,
    pub root_path: String,
    pub reservations: ReservationPolicy,
}

#[utoipa::path(
    get,
    path = "/config",
    tag = "config",
    summary = "Get runtime configuration",
    description = "Returns the non-secret settings the API is running with.",
    responses(
        (status = 200, body = GetConfigResponse)
    )
)]
pub async fn get_config(State(state): State<AppState>) -> Response<GetConfigResponse> {
    Response::OK(GetConfigResponse {
        environment: state.args.env,
        root_path: state.args.server.root_path.clone(),
        reservations: state.service.reservation_policy,
    })
}
