use crate::modules::classes::core::academic_year::AcademicYear;
use crate::modules::classes::core::class_name::ClassName;
use crate::shared::core::grade_level::GradeLevel;
use crate::shared::core::primitives::ClassId;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct ClassCreatedV1 {
    pub class_id: ClassId,
    pub name: ClassName,
    pub grade_level: GradeLevel,
    pub academic_year: AcademicYear,
    pub created_at: i64,
}
