use serde::{Deserialize, Serialize};

use crate::modules::password_reset::core::state::ResetTokenState;
use crate::shared::core::primitives::{ResetTokenId, UserId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetTokenRow {
    pub token_id: ResetTokenId,
    pub user_id: UserId,
    pub token: String,
    pub expires_at: i64,
    pub used_at: Option<i64>,
    pub revoked_at: Option<i64>,
    pub created_at: i64,
}

impl ResetTokenRow {
    pub fn is_valid(&self, now: i64) -> bool {
        self.used_at.is_none() && self.revoked_at.is_none() && now <= self.expires_at
    }
}

pub enum Mutation {
    Upsert(ResetTokenRow),
    Delete(ResetTokenId),
}

pub fn apply(state: &ResetTokenState) -> Vec<Mutation> {
    match state {
        ResetTokenState::None => vec![],
        ResetTokenState::Issued(token) => vec![Mutation::Upsert(ResetTokenRow {
            token_id: token.token_id,
            user_id: token.user_id,
            token: token.token.as_str().to_string(),
            expires_at: token.expires_at,
            used_at: token.used_at,
            revoked_at: token.revoked_at,
            created_at: token.created_at,
        })],
        ResetTokenState::Purged(token_id) => vec![Mutation::Delete(*token_id)],
    }
}
