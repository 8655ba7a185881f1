use crate::shared::core::primitives::UserId;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct UserActivatedV1 {
    pub user_id: UserId,
    pub activated_at: i64,
}
