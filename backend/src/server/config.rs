//! Server settings loaded via OrthoConfig and the resolved server
//! configuration handed to [`super::create_server`].

use std::io;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::inbound::http::state::HttpState;
use crate::outbound::persistence::{
    DEFAULT_CONNECTION_TIMEOUT, DEFAULT_MAX_SIZE, DEFAULT_MIN_IDLE, PoolConfig,
};

/// Interface the server binds to when no host is configured.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Port the server listens on when none is configured.
pub const DEFAULT_PORT: u16 = 3333;
/// Unprefixed variable consulted when no prefixed database URL is set.
pub const FALLBACK_DATABASE_URL_ENV: &str = "DATABASE_URL";

/// Runtime settings layered from CLI flags, `USER_REGISTRY_*` environment
/// variables and an optional configuration file.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USER_REGISTRY")]
pub struct ServerSettings {
    /// Interface address to bind.
    pub host: Option<String>,
    /// TCP port to listen on.
    #[ortho_config(default = 3333)]
    pub port: u16,
    /// PostgreSQL connection URL.
    pub database_url: Option<String>,
    /// Upper bound on pooled connections.
    pub pool_max_size: Option<u32>,
    /// Idle connections kept open.
    pub pool_min_idle: Option<u32>,
    /// Seconds to wait for a pooled connection.
    pub pool_timeout_secs: Option<u64>,
}

impl ServerSettings {
    /// Return the configured host, falling back to all interfaces.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Return the port to listen on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Return the database URL, consulting `DATABASE_URL` when unset.
    pub fn database_url(&self) -> Option<String> {
        self.database_url
            .clone()
            .or_else(|| std::env::var(FALLBACK_DATABASE_URL_ENV).ok())
            .filter(|url| !url.trim().is_empty())
    }

    /// Resolve the socket address to bind.
    ///
    /// # Errors
    ///
    /// Returns [`io::ErrorKind::InvalidInput`] when the host is not an IP
    /// address literal.
    pub fn bind_addr(&self) -> io::Result<SocketAddr> {
        let ip: IpAddr = self.host().parse().map_err(|err| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid bind host {:?}: {err}", self.host()),
            )
        })?;
        Ok(SocketAddr::new(ip, self.port()))
    }

    /// Build the connection pool configuration.
    ///
    /// # Errors
    ///
    /// Returns [`io::ErrorKind::InvalidInput`] when no database URL is
    /// configured.
    pub fn pool_config(&self) -> io::Result<PoolConfig> {
        let url = self.database_url().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                "database URL is not configured; set USER_REGISTRY_DATABASE_URL or DATABASE_URL",
            )
        })?;
        Ok(PoolConfig::new(url)
            .with_max_size(self.pool_max_size.unwrap_or(DEFAULT_MAX_SIZE))
            .with_min_idle(Some(self.pool_min_idle.unwrap_or(DEFAULT_MIN_IDLE)))
            .with_connection_timeout(
                self.pool_timeout_secs
                    .map_or(DEFAULT_CONNECTION_TIMEOUT, Duration::from_secs),
            ))
    }
}

/// Resolved configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) http_state: HttpState,
}

impl ServerConfig {
    /// Construct a server configuration from a bind address and handler
    /// state.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, http_state: HttpState) -> Self {
        Self {
            bind_addr,
            http_state,
        }
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
