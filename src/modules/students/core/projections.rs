use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::modules::students::core::state::StudentState;
use crate::shared::core::grade_level::GradeLevel;
use crate::shared::core::primitives::{ClassId, StudentId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRow {
    pub student_id: StudentId,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub grade_level: GradeLevel,
    pub class_id: ClassId,
    pub student_number: Option<String>,
    pub enrollment_date: NaiveDate,
    pub created_at: i64,
}

pub enum Mutation {
    Upsert(StudentRow),
}

pub fn apply(state: &StudentState) -> Vec<Mutation> {
    match state {
        StudentState::None => vec![],
        StudentState::Registered(student) => vec![Mutation::Upsert(StudentRow {
            student_id: student.student_id,
            first_name: student.personal_info.first_name.clone(),
            last_name: student.personal_info.last_name.clone(),
            date_of_birth: student.personal_info.date_of_birth,
            grade_level: student.grade_level,
            class_id: student.class_id,
            student_number: student.student_number.as_ref().map(|n| n.to_string()),
            enrollment_date: student.enrollment_date,
            created_at: student.created_at,
        })],
    }
}
