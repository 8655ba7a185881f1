use crate::shared::core::primitives::StudentId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvanceGrade {
    pub student_id: StudentId,
    pub advanced_at: i64,
}
