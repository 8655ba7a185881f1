use crate::modules::parent_links::core::relationship_type::RelationshipType;
use crate::shared::core::primitives::{AssociationId, StudentId, UserId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssociateParent {
    pub association_id: AssociationId,
    pub parent_id: UserId,
    pub student_id: StudentId,
    pub relationship_type: RelationshipType,
    pub is_primary_contact: bool,
    pub associated_at: i64,
}
