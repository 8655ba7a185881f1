use crate::shared::core::primitives::{AssociationId, StudentId, UserId};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct ParentStudentDissociatedV1 {
    pub association_id: AssociationId,
    pub parent_id: UserId,
    pub student_id: StudentId,
    pub dissociated_at: i64,
}
