//! Domain failure types.
//!
//! Operations that can fail for an expected, enumerable reason return
//! [`DomainResult`] instead of panicking or reaching for transport types.
//! Each failure kind fixes its own HTTP-style status code, so a boundary
//! adapter can translate any domain failure with one uniform rule: read the
//! status, read the message, serialise both.

use thiserror::Error;

const NOT_FOUND_MESSAGE: &str = "not found";
const VALIDATION_MESSAGE: &str = "validation error";

/// Expected domain failures.
///
/// The set is open: a new kind is added by declaring a new variant together
/// with its status in [`DomainError::status`]; nothing else needs to change.
///
/// ## Invariants
/// - The status reported for a variant is the same for every instance of
///   that variant, regardless of message.
///
/// # Examples
/// ```
/// use postboard::domain::DomainError;
///
/// let err = DomainError::not_found();
/// assert_eq!(err.status(), 404);
/// assert_eq!(err.message(), "not found");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DomainError {
    /// The requested entity does not exist. Status 404.
    #[error("{0}")]
    NotFound(String),
    /// The input violated a domain rule. Status 400.
    #[error("{0}")]
    Validation(String),
}

impl DomainError {
    /// A [`DomainError::NotFound`] with the default message.
    #[must_use]
    pub fn not_found() -> Self {
        Self::NotFound(NOT_FOUND_MESSAGE.to_owned())
    }

    /// A [`DomainError::NotFound`] with a caller-supplied message.
    #[must_use]
    pub fn not_found_with(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// A [`DomainError::Validation`] with the default message.
    #[must_use]
    pub fn validation() -> Self {
        Self::Validation(VALIDATION_MESSAGE.to_owned())
    }

    /// A [`DomainError::Validation`] with a caller-supplied message.
    #[must_use]
    pub fn validation_with(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// HTTP-style status code, fixed per variant.
    #[must_use]
    pub fn status(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            Self::Validation(_) => 400,
        }
    }

    /// Human-readable message carried by the failure.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::NotFound(message) | Self::Validation(message) => message.as_str(),
        }
    }
}

/// Result alias used by every domain operation.
///
/// The compiler enforces the discriminated-union contract: callers must
/// match on the variant before touching the payload, and no value can hold
/// both a success and a failure.
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(DomainError::not_found(), 404)]
    #[case(DomainError::not_found_with("post 7 is gone"), 404)]
    #[case(DomainError::validation(), 400)]
    #[case(DomainError::validation_with("age out of range"), 400)]
    fn status_is_fixed_per_variant(#[case] error: DomainError, #[case] status: u16) {
        assert_eq!(error.status(), status);
    }

    #[rstest]
    fn default_messages_are_stable() {
        assert_eq!(DomainError::not_found().message(), "not found");
        assert_eq!(DomainError::validation().message(), "validation error");
    }

    #[rstest]
    fn custom_message_is_preserved() {
        let error = DomainError::validation_with("email address is malformed");
        assert_eq!(error.message(), "email address is malformed");
        assert_eq!(error.to_string(), "email address is malformed");
    }

    #[rstest]
    fn ok_wraps_value_structurally() {
        let result: DomainResult<u32> = Ok(7);
        assert_eq!(result, Ok(7));
    }

    #[rstest]
    fn err_wraps_error_structurally() {
        let error = DomainError::not_found();
        let result: DomainResult<u32> = Err(error.clone());
        assert_eq!(result, Err(error));
    }
}
