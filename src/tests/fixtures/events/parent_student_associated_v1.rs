// Shared test fixture for ParentStudentAssociatedV1.

use crate::modules::parent_links::core::events::v1::parent_student_associated::ParentStudentAssociatedV1;
use crate::tests::fixtures::commands::associate_parent::AssociateParentBuilder;

pub fn make_parent_student_associated_v1_event() -> ParentStudentAssociatedV1 {
    let command = AssociateParentBuilder::new().build();
    ParentStudentAssociatedV1 {
        association_id: command.association_id,
        parent_id: command.parent_id,
        student_id: command.student_id,
        relationship_type: command.relationship_type,
        is_primary_contact: command.is_primary_contact,
        associated_at: command.associated_at,
    }
}
