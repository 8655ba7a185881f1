use crate::shared::core::primitives::{AssignmentId, ClassId, UserId};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct TeacherUnassignedFromClassV1 {
    pub assignment_id: AssignmentId,
    pub teacher_id: UserId,
    pub class_id: ClassId,
    pub unassigned_at: i64,
}
