// Shared test fixture for the AssociateParent command.

use crate::modules::parent_links::core::relationship_type::RelationshipType;
use crate::modules::parent_links::use_cases::associate_parent::command::AssociateParent;
use crate::shared::core::primitives::{AssociationId, StudentId, UserId};
use crate::tests::fixtures::commands::register_student::FIXTURE_STUDENT_ID;

pub const FIXTURE_PARENT_ID: &str = "0192d1c4-5a3b-7c00-8000-0000000000bb";

pub struct AssociateParentBuilder {
    inner: AssociateParent,
}

impl Default for AssociateParentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl AssociateParentBuilder {
    pub fn new() -> Self {
        Self {
            inner: AssociateParent {
                association_id: AssociationId::parse("0192d1c4-5a3b-7c00-8000-0000000000f1")
                    .unwrap(),
                parent_id: UserId::parse(FIXTURE_PARENT_ID).unwrap(),
                student_id: StudentId::parse(FIXTURE_STUDENT_ID).unwrap(),
                relationship_type: RelationshipType::mother(),
                is_primary_contact: false,
                associated_at: 1_700_000_000_000,
            },
        }
    }

    pub fn association_id(mut self, v: AssociationId) -> Self {
        self.inner.association_id = v;
        self
    }

    pub fn parent_id(mut self, v: UserId) -> Self {
        self.inner.parent_id = v;
        self
    }

    pub fn student_id(mut self, v: StudentId) -> Self {
        self.inner.student_id = v;
        self
    }

    pub fn primary_contact(mut self, v: bool) -> Self {
        self.inner.is_primary_contact = v;
        self
    }

    pub fn build(self) -> AssociateParent {
        self.inner
    }
}
