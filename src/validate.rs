//! Shared validation functions for directory form fields.
//!
//! Centralized rules so every entry point (CLI flags, future hosts) rejects
//! the same inputs the same way. Field-level primitives live here; the
//! per-flow composition is in the form module.

use jiff::civil::Date;
use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use crate::error::{Result, WardbookError};

/// Minimum age for a directory member, in whole years.
pub const ADULT_AGE_YEARS: i16 = 18;

/// Maximum length for free-text fields (job description etc.), in characters.
pub const MAX_FREE_TEXT_LENGTH: usize = 5000;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid"));

/// Validates that a required field is non-empty after trimming.
pub fn validate_required(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(WardbookError::Validation(format!("{field} is required")));
    }
    Ok(())
}

/// Validates an email address.
pub fn validate_email(email: &str) -> Result<()> {
    validate_required("email", email)?;
    if !EMAIL_RE.is_match(email.trim()) {
        return Err(WardbookError::Validation(format!(
            "'{email}' is not a valid email address"
        )));
    }
    Ok(())
}

/// Validates a service base URL: must parse and use an http(s) scheme.
pub fn validate_service_url(value: &str) -> Result<()> {
    let url = Url::parse(value.trim())
        .map_err(|e| WardbookError::Validation(format!("'{value}' is not a valid URL: {e}")))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(WardbookError::Validation(format!(
            "'{value}' must use http or https"
        )));
    }
    Ok(())
}

/// Whole years between a birth date and a reference date.
pub fn age_on(dob: Date, today: Date) -> i16 {
    let mut age = today.year() - dob.year();
    if (today.month(), today.day()) < (dob.month(), dob.day()) {
        age -= 1;
    }
    age
}

/// Validates that a birth date yields an adult age on the given day.
pub fn validate_adult(dob: Date, today: Date) -> Result<()> {
    if age_on(dob, today) < ADULT_AGE_YEARS {
        return Err(WardbookError::Validation(format!(
            "members must be at least {ADULT_AGE_YEARS} years old"
        )));
    }
    Ok(())
}

/// Validates a free-text field's length.
pub fn validate_free_text(field: &str, value: &str) -> Result<()> {
    if value.chars().count() > MAX_FREE_TEXT_LENGTH {
        return Err(WardbookError::Validation(format!(
            "{field} is too long: {} characters (max: {MAX_FREE_TEXT_LENGTH})",
            value.chars().count()
        )));
    }
    Ok(())
}
