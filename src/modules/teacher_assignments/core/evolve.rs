use crate::modules::teacher_assignments::core::events::AssignmentEvent;
use crate::modules::teacher_assignments::core::state::{AssignmentState, TeacherAssignment};

pub fn evolve(state: AssignmentState, event: AssignmentEvent) -> AssignmentState {
    match (state, event) {
        (AssignmentState::None, AssignmentEvent::TeacherAssignedToClassV1(e)) => {
            AssignmentState::Assigned(TeacherAssignment {
                assignment_id: e.assignment_id,
                teacher_id: e.teacher_id,
                class_id: e.class_id,
                role: e.role,
                assigned_date: e.assigned_date,
                created_at: e.assigned_at,
            })
        }
        (AssignmentState::Assigned(assignment), AssignmentEvent::TeacherUnassignedFromClassV1(_)) => {
            AssignmentState::Unassigned(assignment)
        }
        (state, _) => state,
    }
}
