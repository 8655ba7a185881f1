use chrono::NaiveDate;

use crate::modules::students::core::personal_info::StudentPersonalInfo;
use crate::modules::students::core::student_number::StudentNumber;
use crate::shared::core::grade_level::GradeLevel;
use crate::shared::core::primitives::{ClassId, StudentId};

pub fn stream_id(student_id: &StudentId) -> String {
    format!("Student-{student_id}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub student_id: StudentId,
    pub personal_info: StudentPersonalInfo,
    pub grade_level: GradeLevel,
    pub class_id: ClassId,
    pub student_number: Option<StudentNumber>,
    pub enrollment_date: NaiveDate,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StudentState {
    #[default]
    None,
    Registered(Student),
}

impl StudentState {
    pub fn student(&self) -> Option<&Student> {
        match self {
            StudentState::Registered(student) => Some(student),
            StudentState::None => None,
        }
    }
}
