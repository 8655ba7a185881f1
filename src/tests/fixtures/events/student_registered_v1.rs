// Shared test fixture for StudentRegisteredV1.

use crate::modules::students::core::events::v1::student_registered::StudentRegisteredV1;
use crate::tests::fixtures::commands::register_student::RegisterStudentBuilder;

/// Grade 5 student enrolled 2025-09-01 into the fixture class.
pub fn make_student_registered_v1_event() -> StudentRegisteredV1 {
    let command = RegisterStudentBuilder::new().build();
    StudentRegisteredV1 {
        student_id: command.student_id,
        personal_info: command.personal_info,
        grade_level: command.grade_level,
        class_id: command.class_id,
        student_number: command.student_number,
        enrollment_date: command.enrollment_date,
        registered_at: command.registered_at,
    }
}
