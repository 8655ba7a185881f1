use crate::modules::parent_links::core::events::{
    AssociationEvent, v1::parent_student_dissociated::ParentStudentDissociatedV1,
};
use crate::modules::parent_links::core::state::AssociationState;
use crate::modules::parent_links::use_cases::dissociate_parent::command::DissociateParent;
use crate::shared::core::decision::Decision;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("Association not found")]
    NotFound,
}

pub fn decide_dissociate_parent(
    state: &AssociationState,
    command: DissociateParent,
) -> Decision<AssociationEvent, DecideError> {
    let Some(association) = state.active() else {
        return Decision::rejected(DecideError::NotFound);
    };
    Decision::accepted(vec![AssociationEvent::ParentStudentDissociatedV1(
        ParentStudentDissociatedV1 {
            association_id: association.association_id,
            parent_id: association.parent_id,
            student_id: association.student_id,
            dissociated_at: command.dissociated_at,
        },
    )])
}
