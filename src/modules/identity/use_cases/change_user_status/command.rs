use crate::shared::core::primitives::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserStatus {
    Active,
    Deactivated,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeUserStatus {
    pub user_id: UserId,
    pub status: UserStatus,
    pub changed_at: i64,
}
