use chrono::{Datelike, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;

static ACADEMIC_YEAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{4}$").expect("academic year regex must compile"));

/// How far from the current calendar year a start year may lie.
pub const ACADEMIC_YEAR_WINDOW: i32 = 2;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum AcademicYearError {
    #[error("Academic year cannot be null or blank")]
    Blank,

    #[error("Academic year must be in format YYYY-YYYY (e.g., 2024-2025)")]
    Format,

    #[error("Academic year must span consecutive years (e.g., 2024-2025)")]
    NotConsecutive,

    #[error("Academic year must be within ±2 years of current year")]
    OutOfWindow,
}

/// School year such as `2024-2025`.
///
/// Validation happens at the edge. Stored events deserialize without the
/// window check so old years stay readable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AcademicYear(String);

impl AcademicYear {
    pub fn parse(value: &str) -> Result<Self, AcademicYearError> {
        Self::parse_at(value, Utc::now().year())
    }

    pub fn parse_at(value: &str, current_year: i32) -> Result<Self, AcademicYearError> {
        if value.trim().is_empty() {
            return Err(AcademicYearError::Blank);
        }
        let trimmed = value.trim();
        if !ACADEMIC_YEAR_PATTERN.is_match(trimmed) {
            return Err(AcademicYearError::Format);
        }
        let (start, end) = split_years(trimmed).ok_or(AcademicYearError::Format)?;
        if end != start + 1 {
            return Err(AcademicYearError::NotConsecutive);
        }
        if (start - current_year).abs() > ACADEMIC_YEAR_WINDOW {
            return Err(AcademicYearError::OutOfWindow);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The year that started last calendar year, e.g. `2025-2026` during 2026.
    pub fn current() -> Self {
        Self::current_at(Utc::now().year())
    }

    pub fn current_at(current_year: i32) -> Self {
        Self(format!("{}-{}", current_year - 1, current_year))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn start_year(&self) -> i32 {
        split_years(&self.0).map(|(start, _)| start).unwrap_or_default()
    }

    pub fn end_year(&self) -> i32 {
        split_years(&self.0).map(|(_, end)| end).unwrap_or_default()
    }
}

fn split_years(value: &str) -> Option<(i32, i32)> {
    let (start, end) = value.split_once('-')?;
    Some((start.parse().ok()?, end.parse().ok()?))
}

impl fmt::Display for AcademicYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
