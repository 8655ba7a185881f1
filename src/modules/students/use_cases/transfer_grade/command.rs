use crate::shared::core::grade_level::GradeLevel;
use crate::shared::core::primitives::StudentId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferGrade {
    pub student_id: StudentId,
    pub grade_level: GradeLevel,
    pub transferred_at: i64,
}
