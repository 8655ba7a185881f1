use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

use crate::modules::classes::adapters::outbound::projections::ClassQueries;
use crate::modules::classes::core::projections::{ClassRow, Mutation, apply};
use crate::modules::classes::core::state::ClassState;
use crate::shared::application::projector::StateProjection;
use crate::shared::core::grade_level::GradeLevel;
use crate::shared::core::primitives::ClassId;

#[derive(Default)]
pub struct InMemoryClassProjections {
    rows: RwLock<HashMap<ClassId, ClassRow>>,
    is_offline: AtomicBool,
}

impl InMemoryClassProjections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&self) {
        self.is_offline.fetch_xor(true, Ordering::SeqCst);
    }

    fn ensure_online(&self) -> anyhow::Result<()> {
        if self.is_offline.load(Ordering::SeqCst) {
            return Err(anyhow::anyhow!("Class projections offline"));
        }
        Ok(())
    }

    async fn select(&self, keep: impl Fn(&ClassRow) -> bool) -> Vec<ClassRow> {
        let mut rows: Vec<ClassRow> = self
            .rows
            .read()
            .await
            .values()
            .filter(|row| keep(row))
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.class_id.cmp(&b.class_id)));
        rows
    }
}

#[async_trait::async_trait]
impl StateProjection<ClassState> for InMemoryClassProjections {
    async fn project(&self, state: &ClassState) -> anyhow::Result<()> {
        self.ensure_online()?;
        let mut guard = self.rows.write().await;
        for mutation in apply(state) {
            match mutation {
                Mutation::Upsert(row) => {
                    guard.insert(row.class_id, row);
                }
            }
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl ClassQueries for InMemoryClassProjections {
    async fn find_by_id(&self, class_id: ClassId) -> anyhow::Result<Option<ClassRow>> {
        self.ensure_online()?;
        Ok(self.rows.read().await.get(&class_id).cloned())
    }

    async fn exists(
        &self,
        name: &str,
        grade_level: GradeLevel,
        academic_year: &str,
    ) -> anyhow::Result<bool> {
        self.ensure_online()?;
        Ok(self.rows.read().await.values().any(|row| {
            row.name == name && row.grade_level == grade_level && row.academic_year == academic_year
        }))
    }

    async fn list_by_grade(
        &self,
        grade_level: GradeLevel,
        academic_year: Option<&str>,
    ) -> anyhow::Result<Vec<ClassRow>> {
        self.ensure_online()?;
        Ok(self
            .select(|row| {
                row.grade_level == grade_level
                    && academic_year.is_none_or(|year| row.academic_year == year)
            })
            .await)
    }

    async fn list_by_academic_year(&self, academic_year: &str) -> anyhow::Result<Vec<ClassRow>> {
        self.ensure_online()?;
        Ok(self.select(|row| row.academic_year == academic_year).await)
    }
}
