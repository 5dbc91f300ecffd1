//! Postboard: a demo posts API.
//!
//! Domain operations return `Result` values carrying typed, status-bearing
//! failures; thin actix-web adapters translate them into JSON responses and
//! utoipa generates the OpenAPI document.

pub mod api;
pub mod doc;
pub mod domain;
pub mod middleware;
pub mod server;

pub use doc::ApiDoc;
pub use server::{ServerConfig, build_app};
