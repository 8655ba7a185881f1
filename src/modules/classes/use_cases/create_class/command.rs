use crate::modules::classes::core::academic_year::AcademicYear;
use crate::modules::classes::core::class_name::ClassName;
use crate::shared::core::grade_level::GradeLevel;
use crate::shared::core::primitives::ClassId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateClass {
    pub class_id: ClassId,
    pub name: ClassName,
    pub grade_level: GradeLevel,
    pub academic_year: AcademicYear,
    pub created_at: i64,
}
