use async_trait::async_trait;

use crate::modules::classes::core::projections::ClassRow;
use crate::modules::classes::core::state::ClassState;
use crate::shared::application::projector::StateProjection;
use crate::shared::core::grade_level::GradeLevel;
use crate::shared::core::primitives::ClassId;

#[async_trait]
pub trait ClassQueries: Send + Sync {
    async fn find_by_id(&self, class_id: ClassId) -> anyhow::Result<Option<ClassRow>>;

    async fn exists(
        &self,
        name: &str,
        grade_level: GradeLevel,
        academic_year: &str,
    ) -> anyhow::Result<bool>;

    /// Classes of a grade ordered by name, optionally limited to one academic year.
    async fn list_by_grade(
        &self,
        grade_level: GradeLevel,
        academic_year: Option<&str>,
    ) -> anyhow::Result<Vec<ClassRow>>;

    async fn list_by_academic_year(&self, academic_year: &str) -> anyhow::Result<Vec<ClassRow>>;
}

pub trait ClassReadModel: StateProjection<ClassState> + ClassQueries {}

impl<T> ClassReadModel for T where T: StateProjection<ClassState> + ClassQueries {}
