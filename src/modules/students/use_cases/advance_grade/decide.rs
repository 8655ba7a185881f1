use crate::modules::students::core::events::{
    StudentEvent, v1::student_advanced::StudentAdvancedV1,
};
use crate::modules::students::core::state::StudentState;
use crate::modules::students::use_cases::advance_grade::command::AdvanceGrade;
use crate::shared::core::decision::Decision;
use crate::shared::core::grade_level::GradeLevelError;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("Student not found")]
    NotFound,

    #[error(transparent)]
    Grade(#[from] GradeLevelError),
}

pub fn decide_advance_grade(
    state: &StudentState,
    command: AdvanceGrade,
) -> Decision<StudentEvent, DecideError> {
    let Some(student) = state.student() else {
        return Decision::rejected(DecideError::NotFound);
    };
    match student.grade_level.next() {
        Ok(next) => Decision::accepted(vec![StudentEvent::StudentAdvancedV1(StudentAdvancedV1 {
            student_id: student.student_id,
            from_grade: student.grade_level,
            to_grade: next,
            advanced_at: command.advanced_at,
        })]),
        Err(e) => Decision::rejected(e.into()),
    }
}
