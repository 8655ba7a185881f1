// Shared test fixture for TeacherAssignedToClassV1.

use crate::modules::teacher_assignments::core::events::v1::teacher_assigned::TeacherAssignedToClassV1;
use crate::tests::fixtures::commands::assign_teacher::AssignTeacherBuilder;

pub fn make_teacher_assigned_v1_event() -> TeacherAssignedToClassV1 {
    let command = AssignTeacherBuilder::new().build();
    TeacherAssignedToClassV1 {
        assignment_id: command.assignment_id,
        teacher_id: command.teacher_id,
        class_id: command.class_id,
        role: command.role,
        assigned_date: command.assigned_date,
        assigned_at: command.assigned_at,
    }
}
