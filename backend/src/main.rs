//! Service entry-point: loads settings, connects the store and serves the
//! user registry API.

use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use user_registry::outbound::persistence::DbPool;
use user_registry::server::{ServerConfig, ServerSettings, build_http_state, create_server};

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

    let settings = ServerSettings::load()
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let bind_addr = settings.bind_addr()?;
    let pool = DbPool::new(settings.pool_config()?)
        .await
        .map_err(|e| std::io::Error::other(format!("database pool unavailable: {e}")))?;

    let server = create_server(ServerConfig::new(bind_addr, build_http_state(pool)))?;
    info!(port = bind_addr.port(), host = %bind_addr.ip(), "server running");
    server.await
}
