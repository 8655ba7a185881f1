use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;

pub const KINDERGARTEN: u8 = 0;
pub const HIGHEST_GRADE: u8 = 12;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum GradeLevelError {
    #[error("Invalid grade level: {0}. Must be 0-12 (0=K).")]
    OutOfRange(i64),

    #[error("Invalid grade level string: {0}")]
    Unparseable(String),

    #[error("Cannot advance beyond grade 12")]
    CannotAdvance,
}

static GRADE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(K|0|1[0-2]|[1-9])$").expect("grade regex must compile"));

/// Strict request form of a grade: `K` or `0`..`12`, no padding.
pub fn is_grade_token(value: &str) -> bool {
    GRADE_TOKEN.is_match(value)
}

/// School grade from kindergarten (0, displayed as "K") through 12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct GradeLevel(u8);

impl GradeLevel {
    pub fn from_number(value: i64) -> Result<Self, GradeLevelError> {
        if !(KINDERGARTEN as i64..=HIGHEST_GRADE as i64).contains(&value) {
            return Err(GradeLevelError::OutOfRange(value));
        }
        Ok(Self(value as u8))
    }

    pub fn parse(value: &str) -> Result<Self, GradeLevelError> {
        let trimmed = value.trim();
        if trimmed.eq_ignore_ascii_case("K") {
            return Ok(Self(KINDERGARTEN));
        }
        let number = trimmed
            .parse::<i64>()
            .map_err(|_| GradeLevelError::Unparseable(value.to_string()))?;
        Self::from_number(number)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn display(&self) -> String {
        if self.0 == KINDERGARTEN {
            "K".to_string()
        } else {
            self.0.to_string()
        }
    }

    pub fn next(&self) -> Result<Self, GradeLevelError> {
        if self.0 >= HIGHEST_GRADE {
            return Err(GradeLevelError::CannotAdvance);
        }
        Ok(Self(self.0 + 1))
    }
}

impl fmt::Display for GradeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

impl TryFrom<i64> for GradeLevel {
    type Error = GradeLevelError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::from_number(value)
    }
}

impl From<GradeLevel> for i64 {
    fn from(value: GradeLevel) -> Self {
        value.0 as i64
    }
}
