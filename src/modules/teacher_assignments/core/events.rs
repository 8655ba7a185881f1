pub mod v1 {
    pub mod teacher_assigned;
    pub mod teacher_unassigned;
}

use crate::shared::core::domain_event::DomainEvent;
use v1::teacher_assigned::TeacherAssignedToClassV1;
use v1::teacher_unassigned::TeacherUnassignedFromClassV1;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum AssignmentEvent {
    TeacherAssignedToClassV1(TeacherAssignedToClassV1),
    TeacherUnassignedFromClassV1(TeacherUnassignedFromClassV1),
}

impl DomainEvent for AssignmentEvent {
    fn event_type(&self) -> &'static str {
        match self {
            AssignmentEvent::TeacherAssignedToClassV1(_) => "TeacherAssignedToClass",
            AssignmentEvent::TeacherUnassignedFromClassV1(_) => "TeacherUnassignedFromClass",
        }
    }

    fn occurred_at(&self) -> i64 {
        match self {
            AssignmentEvent::TeacherAssignedToClassV1(e) => e.assigned_at,
            AssignmentEvent::TeacherUnassignedFromClassV1(e) => e.unassigned_at,
        }
    }
}
