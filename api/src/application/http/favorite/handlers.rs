pub mod count_favorites;
pub mod get_favorite_status;
pub mod list_favorites;
pub mod toggle_favorite;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct FavoriteStatusResponse {
    pub is_favorite: bool,
}
