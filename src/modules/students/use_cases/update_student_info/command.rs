use crate::modules::students::core::personal_info::StudentPersonalInfo;
use crate::shared::core::primitives::StudentId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateStudentInfo {
    pub student_id: StudentId,
    pub personal_info: StudentPersonalInfo,
    pub updated_at: i64,
}
