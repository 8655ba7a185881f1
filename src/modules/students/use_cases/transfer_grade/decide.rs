use crate::modules::students::core::events::{
    StudentEvent, v1::student_transferred::StudentTransferredV1,
};
use crate::modules::students::core::state::StudentState;
use crate::modules::students::use_cases::transfer_grade::command::TransferGrade;
use crate::shared::core::decision::Decision;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("Student not found")]
    NotFound,
}

pub fn decide_transfer_grade(
    state: &StudentState,
    command: TransferGrade,
) -> Decision<StudentEvent, DecideError> {
    let Some(student) = state.student() else {
        return Decision::rejected(DecideError::NotFound);
    };
    Decision::accepted(vec![StudentEvent::StudentTransferredV1(StudentTransferredV1 {
        student_id: student.student_id,
        from_grade: student.grade_level,
        to_grade: command.grade_level,
        transferred_at: command.transferred_at,
    })])
}
