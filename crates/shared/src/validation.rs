//! Field formats checked by the add-record wizard.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static RECORD_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"^f[0-9]{5}$").expect("record id regex"));
static PERSON_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{6}$").expect("person id regex"));

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("ID must follow the format 'f' followed by 5 digits")]
    RecordId,
    #[error("Owner must be 6 digits")]
    Owner,
    #[error("Each co-owner must be 6 digits")]
    CoOwner,
}

pub fn is_valid_record_id(value: &str) -> bool {
    RECORD_ID.is_match(value)
}

pub fn is_valid_person_id(value: &str) -> bool {
    PERSON_ID.is_match(value)
}

pub fn validate_record_id(value: &str) -> Result<(), ValidationError> {
    if is_valid_record_id(value) {
        Ok(())
    } else {
        Err(ValidationError::RecordId)
    }
}

pub fn validate_owner(value: &str) -> Result<(), ValidationError> {
    if is_valid_person_id(value) {
        Ok(())
    } else {
        Err(ValidationError::Owner)
    }
}

pub fn validate_co_owners<S: AsRef<str>>(values: &[S]) -> Result<(), ValidationError> {
    if values.iter().all(|v| is_valid_person_id(v.as_ref())) {
        Ok(())
    } else {
        Err(ValidationError::CoOwner)
    }
}

/// Splits a comma-separated co-owner entry, trimming pieces and dropping blanks.
pub fn split_co_owners(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}
