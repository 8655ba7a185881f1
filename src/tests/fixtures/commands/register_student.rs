// Shared test fixture for the RegisterStudent command.

use chrono::NaiveDate;

use crate::modules::students::core::personal_info::StudentPersonalInfo;
use crate::modules::students::core::student_number::StudentNumber;
use crate::modules::students::use_cases::register_student::command::RegisterStudent;
use crate::shared::core::grade_level::GradeLevel;
use crate::shared::core::primitives::{ClassId, StudentId};
use crate::tests::fixtures::commands::create_class::FIXTURE_CLASS_ID;

pub const FIXTURE_STUDENT_ID: &str = "0192d1c4-5a3b-7c00-8000-0000000000d1";

pub struct RegisterStudentBuilder {
    inner: RegisterStudent,
}

impl Default for RegisterStudentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl RegisterStudentBuilder {
    pub fn new() -> Self {
        Self {
            inner: RegisterStudent {
                student_id: StudentId::parse(FIXTURE_STUDENT_ID).unwrap(),
                personal_info: StudentPersonalInfo::new(
                    "Ada",
                    "Byron",
                    NaiveDate::from_ymd_opt(2015, 3, 14),
                )
                .unwrap(),
                grade_level: GradeLevel::from_number(5).unwrap(),
                class_id: ClassId::parse(FIXTURE_CLASS_ID).unwrap(),
                student_number: Some(StudentNumber::parse("S-0001").unwrap()),
                enrollment_date: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
                registered_at: 1_700_000_000_000,
            },
        }
    }

    pub fn student_id(mut self, v: StudentId) -> Self {
        self.inner.student_id = v;
        self
    }

    pub fn names(mut self, first: &str, last: &str) -> Self {
        self.inner.personal_info.first_name = first.into();
        self.inner.personal_info.last_name = last.into();
        self
    }

    pub fn grade_level(mut self, v: GradeLevel) -> Self {
        self.inner.grade_level = v;
        self
    }

    pub fn class_id(mut self, v: ClassId) -> Self {
        self.inner.class_id = v;
        self
    }

    pub fn build(self) -> RegisterStudent {
        self.inner
    }
}
