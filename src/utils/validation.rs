//! Input validation utilities

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::error::{AppError, AppResult};

static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+?[0-9][0-9 .\-]{5,30}$").expect("phone regex is valid")
});

/// Validate phone number format (digits, spaces, dots and dashes, optional leading +)
pub fn validate_phone(phone: &str) -> Result<(), &'static str> {
    if PHONE_REGEX.is_match(phone.trim()) {
        Ok(())
    } else {
        Err("Invalid phone number")
    }
}

/// Validate an optional phone number, mapping failures to `AppError::Validation`
pub fn check_phone(phone: Option<&str>) -> AppResult<()> {
    match phone {
        Some(phone) => validate_phone(phone).map_err(|e| AppError::Validation(e.to_string())),
        None => Ok(()),
    }
}

/// Validate that a status is one of the allowed values
pub fn validate_status(status: &str, allowed: &[&str]) -> AppResult<()> {
    if allowed.contains(&status) {
        Ok(())
    } else {
        Err(AppError::Validation(format!(
            "Invalid status '{}'. Valid values: {}",
            status,
            allowed.join(", ")
        )))
    }
}

/// Validate that an optional end date does not precede the start date
pub fn validate_date_range(start: NaiveDate, end: Option<NaiveDate>) -> AppResult<()> {
    match end {
        Some(end) if end < start => Err(AppError::Validation(
            "End date must not be before start date".to_string(),
        )),
        _ => Ok(()),
    }
}

/// Sanitize string input (remove control characters, trim whitespace)
pub fn sanitize_string(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect::<String>()
        .trim()
        .to_string()
}
