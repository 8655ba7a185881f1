use chrono::NaiveDate;

use crate::modules::teacher_assignments::core::teacher_role::TeacherRole;
use crate::shared::core::primitives::{AssignmentId, ClassId, UserId};

pub fn stream_id(assignment_id: &AssignmentId) -> String {
    format!("TeacherAssignment-{assignment_id}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeacherAssignment {
    pub assignment_id: AssignmentId,
    pub teacher_id: UserId,
    pub class_id: ClassId,
    pub role: TeacherRole,
    pub assigned_date: NaiveDate,
    pub created_at: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AssignmentState {
    #[default]
    None,
    Assigned(TeacherAssignment),
    Unassigned(TeacherAssignment),
}

impl AssignmentState {
    /// The assignment while it is in force.
    pub fn active(&self) -> Option<&TeacherAssignment> {
        match self {
            AssignmentState::Assigned(assignment) => Some(assignment),
            AssignmentState::None | AssignmentState::Unassigned(_) => None,
        }
    }
}
