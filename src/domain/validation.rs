// src/domain/validation.rs
//
// Field rules shared by the signup form and the submit endpoint.

use crate::domain::lead::PropertyType;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;
use thiserror::Error;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

static ZIP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{5}(-\d{4})?$").expect("valid zip regex"));

/// One failed rule. The display text is what the form shows inline.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(into = "String")]
pub enum FieldError {
    #[error("This field is required")]
    Required,
    #[error("Enter a valid email address")]
    InvalidEmail,
    #[error("Enter a 10-digit phone number")]
    InvalidPhone,
    #[error("Enter a 5-digit ZIP or ZIP+4")]
    InvalidZip,
    #[error("Select a property type")]
    UnknownPropertyType,
    #[error("Enter a whole number")]
    NotANumber,
    #[error("Must be at least {0}")]
    TooSmall(u32),
    #[error("You must agree to the terms to continue")]
    ConsentRequired,
    #[error("Add at least one property")]
    NoProperties,
}

impl From<FieldError> for String {
    fn from(err: FieldError) -> Self {
        err.to_string()
    }
}

pub fn required(value: &str) -> Result<String, FieldError> {
    let v = value.trim();
    if v.is_empty() {
        return Err(FieldError::Required);
    }
    Ok(v.to_string())
}

pub fn email(value: &str) -> Result<String, FieldError> {
    let v = required(value)?;
    if !EMAIL_RE.is_match(&v) {
        return Err(FieldError::InvalidEmail);
    }
    Ok(v)
}

/// Strip everything but digits; exactly 10 must remain.
pub fn phone(value: &str) -> Result<String, FieldError> {
    let v = required(value)?;
    let digits: String = v.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() != 10 {
        return Err(FieldError::InvalidPhone);
    }
    Ok(digits)
}

pub fn zip_code(value: &str) -> Result<String, FieldError> {
    let v = required(value)?;
    if !ZIP_RE.is_match(&v) {
        return Err(FieldError::InvalidZip);
    }
    Ok(v)
}

pub fn property_type(value: &str) -> Result<PropertyType, FieldError> {
    let v = required(value).map_err(|_| FieldError::UnknownPropertyType)?;
    v.parse().map_err(|_| FieldError::UnknownPropertyType)
}

/// Whole number with a lower bound.
pub fn count(value: &str, min: u32) -> Result<u32, FieldError> {
    let v = required(value)?;
    let n: i64 = v.parse().map_err(|_| FieldError::NotANumber)?;
    if n < i64::from(min) {
        return Err(FieldError::TooSmall(min));
    }
    u32::try_from(n).map_err(|_| FieldError::NotANumber)
}

pub fn consent(value: bool) -> Result<bool, FieldError> {
    if !value {
        return Err(FieldError::ConsentRequired);
    }
    Ok(true)
}

pub fn optional(value: &str) -> Option<String> {
    let v = value.trim();
    (!v.is_empty()).then(|| v.to_string())
}

/// "5551234567" -> "(555) 123-4567". Input must already be normalized.
pub fn format_phone(digits: &str) -> String {
    if digits.len() != 10 {
        return digits.to_string();
    }
    format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..])
}
