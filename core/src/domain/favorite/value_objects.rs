use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FavoriteInput {
    pub user_id: Uuid,
    pub restaurant_id: Uuid,
}
