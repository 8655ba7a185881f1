use crate::modules::students::core::events::StudentEvent;
use crate::modules::students::core::state::{Student, StudentState};

pub fn evolve(state: StudentState, event: StudentEvent) -> StudentState {
    match (state, event) {
        (StudentState::None, StudentEvent::StudentRegisteredV1(e)) => {
            StudentState::Registered(Student {
                student_id: e.student_id,
                personal_info: e.personal_info,
                grade_level: e.grade_level,
                class_id: e.class_id,
                student_number: e.student_number,
                enrollment_date: e.enrollment_date,
                created_at: e.registered_at,
                updated_at: e.registered_at,
            })
        }
        (StudentState::Registered(mut student), StudentEvent::StudentTransferredV1(e)) => {
            student.grade_level = e.to_grade;
            student.updated_at = e.transferred_at;
            StudentState::Registered(student)
        }
        (StudentState::Registered(mut student), StudentEvent::StudentAdvancedV1(e)) => {
            student.grade_level = e.to_grade;
            student.updated_at = e.advanced_at;
            StudentState::Registered(student)
        }
        (StudentState::Registered(mut student), StudentEvent::StudentInfoUpdatedV1(e)) => {
            student.personal_info = e.personal_info;
            student.updated_at = e.updated_at;
            StudentState::Registered(student)
        }
        (state, _) => state,
    }
}
