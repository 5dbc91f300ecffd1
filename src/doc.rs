//! OpenAPI documentation.
//!
//! [`ApiDoc`] generates the OpenAPI specification for the REST API,
//! registering the posts, validate, and health paths plus the response
//! schemas. The document is served as JSON at `GET /openapi`, browsable
//! through Swagger UI at `/docs` in debug builds, and exportable via
//! `cargo run --bin openapi-dump` for external tooling.

use std::sync::OnceLock;

use actix_web::{HttpResponse, get};
use utoipa::OpenApi;

use crate::api::error::ErrorBody;
use crate::api::posts::PostResponse;
use crate::api::profile::ProfileResponse;
use crate::domain::posts::Post;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Postboard API",
        description = "Demo posts service with typed domain errors.",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0.html"
        )
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::api::posts::get_post,
        crate::api::profile::validate,
        crate::api::health::live,
        crate::api::health::ready,
    ),
    components(schemas(Post, PostResponse, ProfileResponse, ErrorBody)),
    tags(
        (name = "posts", description = "Post lookup"),
        (name = "profile", description = "Profile validation"),
        (name = "health", description = "Health probes")
    )
)]
pub struct ApiDoc;

/// Serve the generated OpenAPI document as JSON.
///
/// The document is immutable after startup, so it is generated once and
/// reused across requests.
#[get("/openapi")]
pub async fn openapi_document() -> HttpResponse {
    static DOCUMENT: OnceLock<utoipa::openapi::OpenApi> = OnceLock::new();
    HttpResponse::Ok().json(DOCUMENT.get_or_init(ApiDoc::openapi))
}
