pub mod get_user;
pub mod register_user;
pub mod update_profile;

use dinesure_core::domain::user::entities::User;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UserResponse {
    pub data: User,
}
