use serde::{Deserialize, Serialize};

use crate::modules::classes::core::state::ClassState;
use crate::shared::core::grade_level::GradeLevel;
use crate::shared::core::primitives::ClassId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassRow {
    pub class_id: ClassId,
    pub name: String,
    pub grade_level: GradeLevel,
    pub academic_year: String,
    pub created_at: i64,
}

pub enum Mutation {
    Upsert(ClassRow),
}

pub fn apply(state: &ClassState) -> Vec<Mutation> {
    match state {
        ClassState::None => vec![],
        ClassState::Created(class) => vec![Mutation::Upsert(ClassRow {
            class_id: class.class_id,
            name: class.name.as_str().to_string(),
            grade_level: class.grade_level,
            academic_year: class.academic_year.as_str().to_string(),
            created_at: class.created_at,
        })],
    }
}
