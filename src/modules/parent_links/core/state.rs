use crate::modules::parent_links::core::relationship_type::RelationshipType;
use crate::shared::core::primitives::{AssociationId, StudentId, UserId};

pub fn stream_id(association_id: &AssociationId) -> String {
    format!("ParentStudentAssociation-{association_id}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentStudentAssociation {
    pub association_id: AssociationId,
    pub parent_id: UserId,
    pub student_id: StudentId,
    pub relationship_type: RelationshipType,
    pub is_primary_contact: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AssociationState {
    #[default]
    None,
    Linked(ParentStudentAssociation),
    Dissociated(ParentStudentAssociation),
}

impl AssociationState {
    pub fn active(&self) -> Option<&ParentStudentAssociation> {
        match self {
            AssociationState::Linked(association) => Some(association),
            AssociationState::None | AssociationState::Dissociated(_) => None,
        }
    }
}
