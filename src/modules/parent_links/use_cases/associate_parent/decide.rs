use crate::modules::parent_links::core::events::{
    AssociationEvent, v1::parent_student_associated::ParentStudentAssociatedV1,
};
use crate::modules::parent_links::core::state::AssociationState;
use crate::modules::parent_links::use_cases::associate_parent::command::AssociateParent;
use crate::shared::core::decision::Decision;
use crate::shared::core::primitives::{StudentId, UserId, UserRole};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("Parent {0} does not exist")]
    ParentNotFound(UserId),

    #[error("User {0} is not a parent")]
    NotAParent(UserId),

    #[error("Student {0} does not exist")]
    StudentNotFound(StudentId),

    #[error("Association already exists between parent {parent_id} and student {student_id}")]
    AlreadyExists {
        parent_id: UserId,
        student_id: StudentId,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parties {
    pub parent_role: Option<UserRole>,
    pub student_exists: bool,
    pub already_linked: bool,
}

pub fn decide_associate_parent(
    state: &AssociationState,
    parties: Parties,
    command: AssociateParent,
) -> Decision<AssociationEvent, DecideError> {
    if !matches!(state, AssociationState::None) || parties.already_linked {
        return Decision::rejected(DecideError::AlreadyExists {
            parent_id: command.parent_id,
            student_id: command.student_id,
        });
    }
    match parties.parent_role {
        None => return Decision::rejected(DecideError::ParentNotFound(command.parent_id)),
        Some(UserRole::Parent) => {}
        Some(_) => return Decision::rejected(DecideError::NotAParent(command.parent_id)),
    }
    if !parties.student_exists {
        return Decision::rejected(DecideError::StudentNotFound(command.student_id));
    }

    Decision::accepted(vec![AssociationEvent::ParentStudentAssociatedV1(
        ParentStudentAssociatedV1 {
            association_id: command.association_id,
            parent_id: command.parent_id,
            student_id: command.student_id,
            relationship_type: command.relationship_type,
            is_primary_contact: command.is_primary_contact,
            associated_at: command.associated_at,
        },
    )])
}
