//! Service entry-point: wires routes, logging, and OpenAPI docs.

use actix_web::{HttpServer, web};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use postboard::api::health::HealthState;
use postboard::{ServerConfig, build_app};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config = ServerConfig::from_env()?;
    let health_state = web::Data::new(HealthState::new());
    // Clone for the server factory so the readiness flip below still works.
    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || build_app(server_health_state.clone()))
        .bind(config.bind_addr())?;

    info!(addr = %config.bind_addr(), "listening");
    health_state.mark_ready();
    server.run().await
}
