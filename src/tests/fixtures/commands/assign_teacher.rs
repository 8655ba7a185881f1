// Shared test fixture for the AssignTeacher command.

use chrono::NaiveDate;

use crate::modules::teacher_assignments::core::teacher_role::TeacherRole;
use crate::modules::teacher_assignments::use_cases::assign_teacher::command::AssignTeacher;
use crate::shared::core::primitives::{AssignmentId, ClassId, UserId};
use crate::tests::fixtures::commands::create_class::FIXTURE_CLASS_ID;

pub const FIXTURE_TEACHER_ID: &str = "0192d1c4-5a3b-7c00-8000-0000000000aa";

pub struct AssignTeacherBuilder {
    inner: AssignTeacher,
}

impl Default for AssignTeacherBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl AssignTeacherBuilder {
    pub fn new() -> Self {
        Self {
            inner: AssignTeacher {
                assignment_id: AssignmentId::parse("0192d1c4-5a3b-7c00-8000-0000000000e1").unwrap(),
                teacher_id: UserId::parse(FIXTURE_TEACHER_ID).unwrap(),
                class_id: ClassId::parse(FIXTURE_CLASS_ID).unwrap(),
                role: TeacherRole::homeroom(),
                assigned_date: NaiveDate::from_ymd_opt(2025, 8, 25).unwrap(),
                assigned_at: 1_700_000_000_000,
            },
        }
    }

    pub fn assignment_id(mut self, v: AssignmentId) -> Self {
        self.inner.assignment_id = v;
        self
    }

    pub fn teacher_id(mut self, v: UserId) -> Self {
        self.inner.teacher_id = v;
        self
    }

    pub fn class_id(mut self, v: ClassId) -> Self {
        self.inner.class_id = v;
        self
    }

    pub fn build(self) -> AssignTeacher {
        self.inner
    }
}
