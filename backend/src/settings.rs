//! Server settings loaded via OrthoConfig.
//!
//! Values come from `CLINIC_*` environment variables, configuration files and
//! command-line arguments, in OrthoConfig's usual precedence.

use std::net::{AddrParseError, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Address used when `bind_addr` is not configured.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Configuration for the directory server binary.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CLINIC")]
pub struct ServerSettings {
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// Load the example owners and vets at startup.
    #[ortho_config(default = true)]
    pub seed_example_data: bool,
    /// Emit JSON log lines instead of human-readable output.
    #[ortho_config(default = true)]
    pub log_json: bool,
}

impl ServerSettings {
    /// Configured listen address, falling back to [`DEFAULT_BIND_ADDR`].
    ///
    /// # Errors
    /// Returns [`AddrParseError`] when the configured value is not a socket
    /// address.
    pub fn bind_addr(&self) -> Result<SocketAddr, AddrParseError> {
        self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR).parse()
    }
}
