pub mod v1 {
    pub mod parent_student_associated;
    pub mod parent_student_dissociated;
    pub mod primary_contact_changed;
}

use crate::shared::core::domain_event::DomainEvent;
use v1::parent_student_associated::ParentStudentAssociatedV1;
use v1::parent_student_dissociated::ParentStudentDissociatedV1;
use v1::primary_contact_changed::PrimaryContactChangedV1;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum AssociationEvent {
    ParentStudentAssociatedV1(ParentStudentAssociatedV1),
    PrimaryContactChangedV1(PrimaryContactChangedV1),
    ParentStudentDissociatedV1(ParentStudentDissociatedV1),
}

impl DomainEvent for AssociationEvent {
    fn event_type(&self) -> &'static str {
        match self {
            AssociationEvent::ParentStudentAssociatedV1(_) => "ParentStudentAssociated",
            AssociationEvent::PrimaryContactChangedV1(_) => "PrimaryContactChanged",
            AssociationEvent::ParentStudentDissociatedV1(_) => "ParentStudentDissociated",
        }
    }

    fn occurred_at(&self) -> i64 {
        match self {
            AssociationEvent::ParentStudentAssociatedV1(e) => e.associated_at,
            AssociationEvent::PrimaryContactChangedV1(e) => e.changed_at,
            AssociationEvent::ParentStudentDissociatedV1(e) => e.dissociated_at,
        }
    }
}
