// Shared test fixture for the CreateClass command.

use crate::modules::classes::core::academic_year::AcademicYear;
use crate::modules::classes::core::class_name::ClassName;
use crate::modules::classes::use_cases::create_class::command::CreateClass;
use crate::shared::core::grade_level::GradeLevel;
use crate::shared::core::primitives::ClassId;

pub const FIXTURE_CLASS_ID: &str = "0192d1c4-5a3b-7c00-8000-0000000000c1";

pub struct CreateClassBuilder {
    inner: CreateClass,
}

impl Default for CreateClassBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl CreateClassBuilder {
    pub fn new() -> Self {
        Self {
            inner: CreateClass {
                class_id: ClassId::parse(FIXTURE_CLASS_ID).unwrap(),
                name: ClassName::parse("Math 101").unwrap(),
                grade_level: GradeLevel::from_number(5).unwrap(),
                academic_year: AcademicYear::parse_at("2025-2026", 2026).unwrap(),
                created_at: 1_700_000_000_000,
            },
        }
    }

    pub fn class_id(mut self, v: ClassId) -> Self {
        self.inner.class_id = v;
        self
    }

    pub fn name(mut self, v: &str) -> Self {
        self.inner.name = ClassName::parse(v).unwrap();
        self
    }

    pub fn grade_level(mut self, v: GradeLevel) -> Self {
        self.inner.grade_level = v;
        self
    }

    pub fn academic_year(mut self, v: AcademicYear) -> Self {
        self.inner.academic_year = v;
        self
    }

    pub fn build(self) -> CreateClass {
        self.inner
    }
}
