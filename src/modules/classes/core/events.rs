pub mod v1 {
    pub mod class_created;
}

use crate::shared::core::domain_event::DomainEvent;
use v1::class_created::ClassCreatedV1;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum ClassEvent {
    ClassCreatedV1(ClassCreatedV1),
}

impl DomainEvent for ClassEvent {
    fn event_type(&self) -> &'static str {
        match self {
            ClassEvent::ClassCreatedV1(_) => "ClassCreated",
        }
    }

    fn occurred_at(&self) -> i64 {
        match self {
            ClassEvent::ClassCreatedV1(e) => e.created_at,
        }
    }
}
