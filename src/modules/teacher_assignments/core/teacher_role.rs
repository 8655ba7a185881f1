use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub const MAX_TEACHER_ROLE_LENGTH: usize = 50;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum TeacherRoleError {
    #[error("Teacher role cannot be null or blank")]
    Blank,

    #[error("Teacher role cannot exceed 50 characters")]
    TooLong,
}

/// Free-form role a teacher holds in a class, stored trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeacherRole(String);

impl TeacherRole {
    pub fn parse(value: &str) -> Result<Self, TeacherRoleError> {
        if value.trim().is_empty() {
            return Err(TeacherRoleError::Blank);
        }
        if value.chars().count() > MAX_TEACHER_ROLE_LENGTH {
            return Err(TeacherRoleError::TooLong);
        }
        Ok(Self(value.trim().to_string()))
    }

    pub fn homeroom() -> Self {
        Self("Homeroom Teacher".into())
    }

    pub fn subject() -> Self {
        Self("Subject Teacher".into())
    }

    pub fn assistant() -> Self {
        Self("Assistant Teacher".into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TeacherRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
