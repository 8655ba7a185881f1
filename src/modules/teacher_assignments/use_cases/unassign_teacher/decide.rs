use crate::modules::teacher_assignments::core::events::{
    AssignmentEvent, v1::teacher_unassigned::TeacherUnassignedFromClassV1,
};
use crate::modules::teacher_assignments::core::state::AssignmentState;
use crate::modules::teacher_assignments::use_cases::unassign_teacher::command::UnassignTeacher;
use crate::shared::core::decision::Decision;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("Assignment not found")]
    NotFound,
}

pub fn decide_unassign_teacher(
    state: &AssignmentState,
    command: UnassignTeacher,
) -> Decision<AssignmentEvent, DecideError> {
    let Some(assignment) = state.active() else {
        return Decision::rejected(DecideError::NotFound);
    };
    Decision::accepted(vec![AssignmentEvent::TeacherUnassignedFromClassV1(
        TeacherUnassignedFromClassV1 {
            assignment_id: assignment.assignment_id,
            teacher_id: assignment.teacher_id,
            class_id: assignment.class_id,
            unassigned_at: command.unassigned_at,
        },
    )])
}
