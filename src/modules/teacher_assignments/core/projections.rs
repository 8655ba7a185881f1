use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::modules::teacher_assignments::core::state::AssignmentState;
use crate::shared::core::primitives::{AssignmentId, ClassId, UserId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentRow {
    pub assignment_id: AssignmentId,
    pub teacher_id: UserId,
    pub class_id: ClassId,
    pub role: String,
    pub assigned_date: NaiveDate,
    pub created_at: i64,
}

pub enum Mutation {
    Upsert(AssignmentRow),
    Delete(AssignmentId),
}

pub fn apply(state: &AssignmentState) -> Vec<Mutation> {
    match state {
        AssignmentState::None => vec![],
        AssignmentState::Assigned(a) => vec![Mutation::Upsert(AssignmentRow {
            assignment_id: a.assignment_id,
            teacher_id: a.teacher_id,
            class_id: a.class_id,
            role: a.role.as_str().to_string(),
            assigned_date: a.assigned_date,
            created_at: a.created_at,
        })],
        AssignmentState::Unassigned(a) => vec![Mutation::Delete(a.assignment_id)],
    }
}
