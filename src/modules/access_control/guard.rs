use std::sync::Arc;
use thiserror::Error;

use crate::modules::parent_links::adapters::outbound::projections::AssociationQueries;
use crate::modules::students::adapters::outbound::projections::StudentQueries;
use crate::modules::teacher_assignments::adapters::outbound::projections::AssignmentQueries;
use crate::shared::auth::principal::Principal;
use crate::shared::core::primitives::{ClassId, StudentId, UserId, UserRole};
use crate::shared::http::api_error::ApiError;

#[derive(Debug, Error)]
pub enum AccessError {
    #[error("Teacher not assigned to this class")]
    TeacherNotAssigned,

    #[error("Student not in teacher's assigned class")]
    StudentNotInClass,

    #[error("Parent not linked to this student")]
    ParentNotLinked,

    #[error("Access restricted to your own records")]
    NotOwnRecord,

    #[error("Invalid user role")]
    InvalidRole,

    #[error("access lookup failed: {0}")]
    Lookup(#[from] anyhow::Error),
}

impl From<AccessError> for ApiError {
    fn from(error: AccessError) -> Self {
        match error {
            AccessError::Lookup(e) => {
                tracing::error!(error = %e, "ownership lookup failed");
                ApiError::internal()
            }
            denied => ApiError::forbidden(denied.to_string()),
        }
    }
}

/// Ownership rules layered on top of role checks. Administrators pass every
/// check.
pub struct AccessGuard {
    assignments: Arc<dyn AssignmentQueries>,
    students: Arc<dyn StudentQueries>,
    associations: Arc<dyn AssociationQueries>,
}

impl AccessGuard {
    pub fn new(
        assignments: Arc<dyn AssignmentQueries>,
        students: Arc<dyn StudentQueries>,
        associations: Arc<dyn AssociationQueries>,
    ) -> Self {
        Self {
            assignments,
            students,
            associations,
        }
    }

    /// Teachers must be assigned to the class.
    pub async fn ensure_class(
        &self,
        principal: &Principal,
        class_id: ClassId,
    ) -> Result<(), AccessError> {
        if principal.is_admin() {
            return Ok(());
        }
        if !principal.has_role(UserRole::Teacher) {
            return Err(AccessError::InvalidRole);
        }
        match self
            .assignments
            .find_by_teacher_and_class(principal.user_id, class_id)
            .await?
        {
            Some(_) => Ok(()),
            None => Err(AccessError::TeacherNotAssigned),
        }
    }

    /// Teachers must teach the student's class; parents must be linked.
    pub async fn ensure_student(
        &self,
        principal: &Principal,
        student_id: StudentId,
    ) -> Result<(), AccessError> {
        if principal.is_admin() {
            return Ok(());
        }
        if principal.has_role(UserRole::Teacher) {
            let Some(student) = self.students.find_by_id(student_id).await? else {
                return Err(AccessError::StudentNotInClass);
            };
            return match self
                .assignments
                .find_by_teacher_and_class(principal.user_id, student.class_id)
                .await?
            {
                Some(_) => Ok(()),
                None => Err(AccessError::StudentNotInClass),
            };
        }
        if principal.has_role(UserRole::Parent) {
            return match self
                .associations
                .find_by_parent_and_student(principal.user_id, student_id)
                .await?
            {
                Some(_) => Ok(()),
                None => Err(AccessError::ParentNotLinked),
            };
        }
        Err(AccessError::InvalidRole)
    }

    pub fn ensure_self(&self, principal: &Principal, user_id: UserId) -> Result<(), AccessError> {
        if principal.is_admin() || principal.user_id == user_id {
            return Ok(());
        }
        Err(AccessError::NotOwnRecord)
    }
}
