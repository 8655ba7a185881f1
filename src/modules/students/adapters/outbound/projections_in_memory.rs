use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

use crate::modules::students::adapters::outbound::projections::StudentQueries;
use crate::modules::students::core::projections::{Mutation, StudentRow, apply};
use crate::modules::students::core::state::StudentState;
use crate::shared::application::projector::StateProjection;
use crate::shared::core::grade_level::GradeLevel;
use crate::shared::core::primitives::{ClassId, StudentId};

#[derive(Default)]
pub struct InMemoryStudentProjections {
    rows: RwLock<HashMap<StudentId, StudentRow>>,
    is_offline: AtomicBool,
}

impl InMemoryStudentProjections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&self) {
        self.is_offline.fetch_xor(true, Ordering::SeqCst);
    }

    fn ensure_online(&self) -> anyhow::Result<()> {
        if self.is_offline.load(Ordering::SeqCst) {
            return Err(anyhow::anyhow!("Student projections offline"));
        }
        Ok(())
    }

    async fn select(&self, keep: impl Fn(&StudentRow) -> bool) -> Vec<StudentRow> {
        let mut rows: Vec<StudentRow> = self
            .rows
            .read()
            .await
            .values()
            .filter(|row| keep(row))
            .cloned()
            .collect();
        rows.sort_by(|a, b| {
            (&a.last_name, &a.first_name, a.student_id).cmp(&(&b.last_name, &b.first_name, b.student_id))
        });
        rows
    }
}

#[async_trait::async_trait]
impl StateProjection<StudentState> for InMemoryStudentProjections {
    async fn project(&self, state: &StudentState) -> anyhow::Result<()> {
        self.ensure_online()?;
        let mut guard = self.rows.write().await;
        for mutation in apply(state) {
            match mutation {
                Mutation::Upsert(row) => {
                    guard.insert(row.student_id, row);
                }
            }
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl StudentQueries for InMemoryStudentProjections {
    async fn find_by_id(&self, student_id: StudentId) -> anyhow::Result<Option<StudentRow>> {
        self.ensure_online()?;
        Ok(self.rows.read().await.get(&student_id).cloned())
    }

    async fn list_by_class(&self, class_id: ClassId) -> anyhow::Result<Vec<StudentRow>> {
        self.ensure_online()?;
        Ok(self.select(|row| row.class_id == class_id).await)
    }

    async fn list_by_grade(&self, grade_level: GradeLevel) -> anyhow::Result<Vec<StudentRow>> {
        self.ensure_online()?;
        Ok(self.select(|row| row.grade_level == grade_level).await)
    }
}
