use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum PersonalInfoError {
    #[error("First name is required")]
    FirstNameRequired,

    #[error("Last name is required")]
    LastNameRequired,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentPersonalInfo {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
}

impl StudentPersonalInfo {
    pub fn new(
        first_name: &str,
        last_name: &str,
        date_of_birth: Option<NaiveDate>,
    ) -> Result<Self, PersonalInfoError> {
        if first_name.trim().is_empty() {
            return Err(PersonalInfoError::FirstNameRequired);
        }
        if last_name.trim().is_empty() {
            return Err(PersonalInfoError::LastNameRequired);
        }
        Ok(Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            date_of_birth,
        })
    }
}
