use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub const MAX_RELATIONSHIP_TYPE_LENGTH: usize = 50;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum RelationshipTypeError {
    #[error("Relationship type cannot be null or blank")]
    Blank,

    #[error("Relationship type cannot exceed 50 characters")]
    TooLong,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RelationshipType(String);

impl RelationshipType {
    pub fn parse(value: &str) -> Result<Self, RelationshipTypeError> {
        if value.trim().is_empty() {
            return Err(RelationshipTypeError::Blank);
        }
        if value.chars().count() > MAX_RELATIONSHIP_TYPE_LENGTH {
            return Err(RelationshipTypeError::TooLong);
        }
        Ok(Self(value.trim().to_string()))
    }

    pub fn father() -> Self {
        Self("Father".into())
    }

    pub fn mother() -> Self {
        Self("Mother".into())
    }

    pub fn guardian() -> Self {
        Self("Guardian".into())
    }

    pub fn stepfather() -> Self {
        Self("Stepfather".into())
    }

    pub fn stepmother() -> Self {
        Self("Stepmother".into())
    }

    pub fn grandparent() -> Self {
        Self("Grandparent".into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RelationshipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
