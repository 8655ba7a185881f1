// Event payload: StudentRegisteredV1.
//
// Full enrollment record. `enrollment_date` is a calendar date,
// `registered_at` epoch milliseconds.

use chrono::NaiveDate;

use crate::modules::students::core::personal_info::StudentPersonalInfo;
use crate::modules::students::core::student_number::StudentNumber;
use crate::shared::core::grade_level::GradeLevel;
use crate::shared::core::primitives::{ClassId, StudentId};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct StudentRegisteredV1 {
    pub student_id: StudentId,
    pub personal_info: StudentPersonalInfo,
    pub grade_level: GradeLevel,
    pub class_id: ClassId,
    pub student_number: Option<StudentNumber>,
    pub enrollment_date: NaiveDate,
    pub registered_at: i64,
}
