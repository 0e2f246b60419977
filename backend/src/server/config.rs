//! Listener settings and the assembled server configuration.

use std::net::SocketAddr;

use adtech::inbound::http::auth_config::AuthSettings;
use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Listener address loaded via OrthoConfig (`ADTECH_HOST`, `ADTECH_PORT`).
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ADTECH")]
pub struct ServerSettings {
    /// Interface to bind; defaults to all interfaces.
    pub host: Option<String>,
    /// TCP port; defaults to 8080.
    pub port: Option<u16>,
}

impl ServerSettings {
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Socket address to bind.
    ///
    /// # Errors
    /// Returns [`std::io::Error`] when the host is not an IP address.
    pub fn bind_addr(&self) -> std::io::Result<SocketAddr> {
        let host = self.host();
        let ip = host.parse().map_err(|err| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid ADTECH_HOST '{host}': {err}"),
            )
        })?;
        Ok(SocketAddr::new(ip, self.port()))
    }
}

/// Everything `create_server` needs.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) auth: AuthSettings,
}

impl ServerConfig {
    #[must_use]
    pub fn new(bind_addr: SocketAddr, auth: AuthSettings) -> Self {
        Self { bind_addr, auth }
    }
}
