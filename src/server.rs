//! Server configuration and application wiring.

use std::net::SocketAddr;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use crate::api::health::HealthState;
use crate::middleware::RequestLog;
use crate::{api, doc};

/// Address used when `POSTBOARD_ADDR` is unset.
pub const DEFAULT_ADDR: &str = "0.0.0.0:8787";

/// Environment variable naming the socket address to bind.
pub const ADDR_ENV: &str = "POSTBOARD_ADDR";

/// Startup configuration read from the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    bind_addr: SocketAddr,
}

impl ServerConfig {
    /// Read configuration from the environment, falling back to defaults.
    ///
    /// # Errors
    /// Returns [`std::io::Error`] when `POSTBOARD_ADDR` is set but does not
    /// parse as a socket address.
    pub fn from_env() -> std::io::Result<Self> {
        let addr = std::env::var(ADDR_ENV).unwrap_or_else(|_| DEFAULT_ADDR.to_owned());
        let bind_addr = addr
            .parse::<SocketAddr>()
            .map_err(|e| std::io::Error::other(format!("invalid {ADDR_ENV} '{addr}': {e}")))?;
        Ok(Self { bind_addr })
    }

    /// The socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

/// Build the actix application with all routes and middleware.
///
/// Shared between `main` and the integration tests so both exercise the
/// same wiring.
pub fn build_app(
    health_state: web::Data<HealthState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let mut app = App::new()
        .app_data(health_state)
        .app_data(web::QueryConfig::default().error_handler(api::error::query_error_handler))
        .wrap(RequestLog)
        .service(api::posts::get_post)
        .service(api::profile::validate)
        .service(doc::openapi_document)
        .service(api::health::live)
        .service(api::health::ready);

    #[cfg(debug_assertions)]
    {
        app = app.service(
            SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", doc::ApiDoc::openapi()),
        );
    }

    app
}
