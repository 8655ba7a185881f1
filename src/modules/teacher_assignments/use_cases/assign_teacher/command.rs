use chrono::NaiveDate;

use crate::modules::teacher_assignments::core::teacher_role::TeacherRole;
use crate::shared::core::primitives::{AssignmentId, ClassId, UserId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignTeacher {
    pub assignment_id: AssignmentId,
    pub teacher_id: UserId,
    pub class_id: ClassId,
    pub role: TeacherRole,
    pub assigned_date: NaiveDate,
    pub assigned_at: i64,
}
