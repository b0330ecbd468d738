//! HTTP server configuration object.

use std::net::SocketAddr;

use clinic_directory::outbound::memory::InMemoryDirectory;

/// Everything needed to start the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) directory: InMemoryDirectory,
}

impl ServerConfig {
    /// Serve `directory` on `bind_addr`.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, directory: InMemoryDirectory) -> Self {
        Self {
            bind_addr,
            directory,
        }
    }
}
