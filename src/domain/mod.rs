//! Domain layer.
//!
//! Transport-agnostic operations and their failure types. Everything here
//! returns [`DomainResult`] for expected failures; the HTTP adapters in
//! [`crate::api`] translate those into wire responses.

pub mod error;
pub mod posts;
pub mod profile;

pub use error::{DomainError, DomainResult};
