use crate::modules::parent_links::core::events::AssociationEvent;
use crate::modules::parent_links::core::state::{AssociationState, ParentStudentAssociation};

pub fn evolve(state: AssociationState, event: AssociationEvent) -> AssociationState {
    match (state, event) {
        (AssociationState::None, AssociationEvent::ParentStudentAssociatedV1(e)) => {
            AssociationState::Linked(ParentStudentAssociation {
                association_id: e.association_id,
                parent_id: e.parent_id,
                student_id: e.student_id,
                relationship_type: e.relationship_type,
                is_primary_contact: e.is_primary_contact,
                created_at: e.associated_at,
                updated_at: e.associated_at,
            })
        }
        (AssociationState::Linked(mut association), AssociationEvent::PrimaryContactChangedV1(e)) => {
            association.is_primary_contact = e.is_primary_contact;
            association.updated_at = e.changed_at;
            AssociationState::Linked(association)
        }
        (AssociationState::Linked(association), AssociationEvent::ParentStudentDissociatedV1(_)) => {
            AssociationState::Dissociated(association)
        }
        (state, _) => state,
    }
}
