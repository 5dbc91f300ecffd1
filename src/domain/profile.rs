//! Profile validation.
//!
//! The route layer only guarantees the query parameters parsed into the
//! right shapes; the rules below (age bounds, email form) are domain rules
//! and live here, reported through [`DomainError::Validation`].

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{DomainError, DomainResult};

/// Youngest accepted age, inclusive.
pub const MIN_AGE: u8 = 18;
/// Oldest accepted age, inclusive.
pub const MAX_AGE: u8 = 100;

/// A validated profile, echoing the accepted inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Profile {
    /// Age in years.
    #[schema(example = 25)]
    pub age: u8,
    /// Contact email address.
    #[schema(example = "valid@example.com")]
    pub email: String,
}

/// Validate an age/email pair and echo it back as a [`Profile`].
///
/// # Errors
/// Returns [`DomainError::Validation`] with a field-specific message when
/// the age falls outside `MIN_AGE..=MAX_AGE` or the email is malformed.
pub fn validate_profile(age: u8, email: &str) -> DomainResult<Profile> {
    if !(MIN_AGE..=MAX_AGE).contains(&age) {
        return Err(DomainError::validation_with(format!(
            "age must be between {MIN_AGE} and {MAX_AGE}"
        )));
    }
    check_email(email)?;
    Ok(Profile {
        age,
        email: email.to_owned(),
    })
}

/// Minimal structural email check: one `@`, non-empty local part, and a
/// dotted domain. Deliverability is out of scope for the demo.
fn check_email(email: &str) -> DomainResult<()> {
    let malformed = || DomainError::validation_with("email address is malformed");

    if email.chars().any(char::is_whitespace) {
        return Err(malformed());
    }
    let Some((local, domain)) = email.split_once('@') else {
        return Err(malformed());
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(malformed());
    }
    if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return Err(malformed());
    }
    Ok(())
}
