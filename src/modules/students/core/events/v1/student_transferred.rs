use crate::shared::core::grade_level::GradeLevel;
use crate::shared::core::primitives::StudentId;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct StudentTransferredV1 {
    pub student_id: StudentId,
    pub from_grade: GradeLevel,
    pub to_grade: GradeLevel,
    pub transferred_at: i64,
}
