use serde::{Deserialize, Serialize};

use crate::modules::parent_links::core::state::AssociationState;
use crate::shared::core::primitives::{AssociationId, StudentId, UserId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssociationRow {
    pub association_id: AssociationId,
    pub parent_id: UserId,
    pub student_id: StudentId,
    pub relationship_type: String,
    pub is_primary_contact: bool,
    pub created_at: i64,
}

pub enum Mutation {
    Upsert(AssociationRow),
    Delete(AssociationId),
}

pub fn apply(state: &AssociationState) -> Vec<Mutation> {
    match state {
        AssociationState::None => vec![],
        AssociationState::Linked(a) => vec![Mutation::Upsert(AssociationRow {
            association_id: a.association_id,
            parent_id: a.parent_id,
            student_id: a.student_id,
            relationship_type: a.relationship_type.as_str().to_string(),
            is_primary_contact: a.is_primary_contact,
            created_at: a.created_at,
        })],
        AssociationState::Dissociated(a) => vec![Mutation::Delete(a.association_id)],
    }
}
