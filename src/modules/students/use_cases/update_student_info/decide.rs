use crate::modules::students::core::events::{
    StudentEvent, v1::student_info_updated::StudentInfoUpdatedV1,
};
use crate::modules::students::core::state::StudentState;
use crate::modules::students::use_cases::update_student_info::command::UpdateStudentInfo;
use crate::shared::core::decision::Decision;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("Student not found")]
    NotFound,
}

/// Unchanged details produce no event.
pub fn decide_update_student_info(
    state: &StudentState,
    command: UpdateStudentInfo,
) -> Decision<StudentEvent, DecideError> {
    let Some(student) = state.student() else {
        return Decision::rejected(DecideError::NotFound);
    };
    if student.personal_info == command.personal_info {
        return Decision::accepted(Vec::new());
    }
    Decision::accepted(vec![StudentEvent::StudentInfoUpdatedV1(StudentInfoUpdatedV1 {
        student_id: student.student_id,
        personal_info: command.personal_info,
        updated_at: command.updated_at,
    })])
}
