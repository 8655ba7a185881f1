use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub const MAX_CLASS_NAME_LENGTH: usize = 100;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ClassNameError {
    #[error("Class name cannot be null or blank")]
    Blank,

    #[error("Class name cannot exceed 100 characters")]
    TooLong,
}

/// Display name of a class, stored trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassName(String);

impl ClassName {
    /// The length limit applies to the raw input, before trimming.
    pub fn parse(value: &str) -> Result<Self, ClassNameError> {
        if value.trim().is_empty() {
            return Err(ClassNameError::Blank);
        }
        if value.chars().count() > MAX_CLASS_NAME_LENGTH {
            return Err(ClassNameError::TooLong);
        }
        Ok(Self(value.trim().to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
