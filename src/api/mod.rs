//! REST API modules.

pub mod error;
pub mod health;
pub mod posts;
pub mod profile;

pub use error::{ApiError, ApiResult};
