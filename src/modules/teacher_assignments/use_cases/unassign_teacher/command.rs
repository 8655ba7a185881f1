use crate::shared::core::primitives::AssignmentId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnassignTeacher {
    pub assignment_id: AssignmentId,
    pub unassigned_at: i64,
}
