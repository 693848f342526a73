//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use zeroize::Zeroizing;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) token_secret: Zeroizing<Vec<u8>>,
}

impl ServerConfig {
    /// Construct a server configuration from the resolved signing secret
    /// and bind address.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, token_secret: Vec<u8>) -> Self {
        Self {
            bind_addr,
            token_secret: Zeroizing::new(token_secret),
        }
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
