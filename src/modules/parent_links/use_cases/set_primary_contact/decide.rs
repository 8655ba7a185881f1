use crate::modules::parent_links::core::events::{
    AssociationEvent, v1::primary_contact_changed::PrimaryContactChangedV1,
};
use crate::modules::parent_links::core::state::AssociationState;
use crate::modules::parent_links::use_cases::set_primary_contact::command::SetPrimaryContact;
use crate::shared::core::decision::Decision;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("Association not found")]
    NotFound,
}

pub fn decide_set_primary_contact(
    state: &AssociationState,
    command: SetPrimaryContact,
) -> Decision<AssociationEvent, DecideError> {
    let Some(association) = state.active() else {
        return Decision::rejected(DecideError::NotFound);
    };
    if association.is_primary_contact == command.is_primary_contact {
        return Decision::accepted(vec![]);
    }
    Decision::accepted(vec![AssociationEvent::PrimaryContactChangedV1(
        PrimaryContactChangedV1 {
            association_id: association.association_id,
            is_primary_contact: command.is_primary_contact,
            changed_at: command.changed_at,
        },
    )])
}
