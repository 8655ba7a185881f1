use crate::modules::classes::core::events::{ClassEvent, v1::class_created::ClassCreatedV1};
use crate::modules::classes::core::state::ClassState;
use crate::modules::classes::use_cases::create_class::command::CreateClass;
use crate::shared::core::decision::Decision;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error(
        "Class with name '{name}' already exists for grade {grade} in academic year {academic_year}"
    )]
    AlreadyExists {
        name: String,
        grade: String,
        academic_year: String,
    },
}

pub fn decide_create_class(
    state: &ClassState,
    name_taken: bool,
    command: CreateClass,
) -> Decision<ClassEvent, DecideError> {
    if name_taken || state.class().is_some() {
        return Decision::rejected(DecideError::AlreadyExists {
            name: command.name.to_string(),
            grade: command.grade_level.display(),
            academic_year: command.academic_year.to_string(),
        });
    }
    Decision::accepted(vec![ClassEvent::ClassCreatedV1(ClassCreatedV1 {
        class_id: command.class_id,
        name: command.name,
        grade_level: command.grade_level,
        academic_year: command.academic_year,
        created_at: command.created_at,
    })])
}
