use crate::modules::teacher_assignments::core::events::{
    AssignmentEvent, v1::teacher_assigned::TeacherAssignedToClassV1,
};
use crate::modules::teacher_assignments::core::state::AssignmentState;
use crate::modules::teacher_assignments::use_cases::assign_teacher::command::AssignTeacher;
use crate::shared::core::decision::Decision;
use crate::shared::core::primitives::{ClassId, UserId, UserRole};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("Teacher {0} does not exist")]
    TeacherNotFound(UserId),

    #[error("User {0} is not a teacher")]
    NotATeacher(UserId),

    #[error("Class {0} does not exist")]
    ClassNotFound(ClassId),

    #[error("Assignment already exists between teacher {teacher_id} and class {class_id}")]
    AlreadyExists { teacher_id: UserId, class_id: ClassId },
}

/// What the read models know about the parties at decision time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parties {
    pub teacher_role: Option<UserRole>,
    pub class_exists: bool,
    pub already_assigned: bool,
}

pub fn decide_assign_teacher(
    state: &AssignmentState,
    parties: Parties,
    command: AssignTeacher,
) -> Decision<AssignmentEvent, DecideError> {
    if !matches!(state, AssignmentState::None) || parties.already_assigned {
        return Decision::rejected(DecideError::AlreadyExists {
            teacher_id: command.teacher_id,
            class_id: command.class_id,
        });
    }
    match parties.teacher_role {
        None => return Decision::rejected(DecideError::TeacherNotFound(command.teacher_id)),
        Some(UserRole::Teacher) => {}
        Some(_) => return Decision::rejected(DecideError::NotATeacher(command.teacher_id)),
    }
    if !parties.class_exists {
        return Decision::rejected(DecideError::ClassNotFound(command.class_id));
    }

    Decision::accepted(vec![AssignmentEvent::TeacherAssignedToClassV1(
        TeacherAssignedToClassV1 {
            assignment_id: command.assignment_id,
            teacher_id: command.teacher_id,
            class_id: command.class_id,
            role: command.role,
            assigned_date: command.assigned_date,
            assigned_at: command.assigned_at,
        },
    )])
}
