use async_trait::async_trait;

use crate::modules::students::core::projections::StudentRow;
use crate::modules::students::core::state::StudentState;
use crate::shared::application::projector::StateProjection;
use crate::shared::core::grade_level::GradeLevel;
use crate::shared::core::primitives::{ClassId, StudentId};

#[async_trait]
pub trait StudentQueries: Send + Sync {
    async fn find_by_id(&self, student_id: StudentId) -> anyhow::Result<Option<StudentRow>>;

    /// Ordered by last name, then first name.
    async fn list_by_class(&self, class_id: ClassId) -> anyhow::Result<Vec<StudentRow>>;

    async fn list_by_grade(&self, grade_level: GradeLevel) -> anyhow::Result<Vec<StudentRow>>;
}

pub trait StudentReadModel: StateProjection<StudentState> + StudentQueries {}

impl<T> StudentReadModel for T where T: StateProjection<StudentState> + StudentQueries {}
