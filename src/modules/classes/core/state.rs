use crate::modules::classes::core::academic_year::AcademicYear;
use crate::modules::classes::core::class_name::ClassName;
use crate::shared::core::grade_level::GradeLevel;
use crate::shared::core::primitives::ClassId;

pub fn stream_id(class_id: &ClassId) -> String {
    format!("Class-{class_id}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchoolClass {
    pub class_id: ClassId,
    pub name: ClassName,
    pub grade_level: GradeLevel,
    pub academic_year: AcademicYear,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ClassState {
    #[default]
    None,
    Created(SchoolClass),
}

impl ClassState {
    pub fn class(&self) -> Option<&SchoolClass> {
        match self {
            ClassState::Created(class) => Some(class),
            ClassState::None => None,
        }
    }
}
