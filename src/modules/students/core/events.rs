pub mod v1 {
    pub mod student_advanced;
    pub mod student_info_updated;
    pub mod student_registered;
    pub mod student_transferred;
}

use crate::shared::core::domain_event::DomainEvent;
use v1::{
    student_advanced::StudentAdvancedV1, student_info_updated::StudentInfoUpdatedV1,
    student_registered::StudentRegisteredV1, student_transferred::StudentTransferredV1,
};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum StudentEvent {
    StudentRegisteredV1(StudentRegisteredV1),
    StudentTransferredV1(StudentTransferredV1),
    StudentAdvancedV1(StudentAdvancedV1),
    StudentInfoUpdatedV1(StudentInfoUpdatedV1),
}

impl DomainEvent for StudentEvent {
    fn event_type(&self) -> &'static str {
        match self {
            StudentEvent::StudentRegisteredV1(_) => "StudentRegistered",
            StudentEvent::StudentTransferredV1(_) => "StudentTransferred",
            StudentEvent::StudentAdvancedV1(_) => "StudentAdvanced",
            StudentEvent::StudentInfoUpdatedV1(_) => "StudentInfoUpdated",
        }
    }

    fn occurred_at(&self) -> i64 {
        match self {
            StudentEvent::StudentRegisteredV1(e) => e.registered_at,
            StudentEvent::StudentTransferredV1(e) => e.transferred_at,
            StudentEvent::StudentAdvancedV1(e) => e.advanced_at,
            StudentEvent::StudentInfoUpdatedV1(e) => e.updated_at,
        }
    }
}
