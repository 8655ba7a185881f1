use crate::shared::core::primitives::UserId;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct UserDeactivatedV1 {
    pub user_id: UserId,
    pub deactivated_at: i64,
}
