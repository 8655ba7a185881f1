use crate::shared::core::primitives::UserId;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct UserLoggedInV1 {
    pub user_id: UserId,
    pub logged_in_at: i64,
}
