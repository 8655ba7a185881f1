use crate::modules::classes::core::events::ClassEvent;
use crate::modules::classes::core::state::{ClassState, SchoolClass};

pub fn evolve(state: ClassState, event: ClassEvent) -> ClassState {
    match (state, event) {
        (ClassState::None, ClassEvent::ClassCreatedV1(e)) => ClassState::Created(SchoolClass {
            class_id: e.class_id,
            name: e.name,
            grade_level: e.grade_level,
            academic_year: e.academic_year,
            created_at: e.created_at,
            updated_at: e.created_at,
        }),
        (state, _) => state,
    }
}
