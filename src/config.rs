//! Server configuration

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Bind configuration for the HTTP server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind the listener to
    pub host: IpAddr,
    /// TCP port to listen on
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 3333,
        }
    }
}

impl ServerConfig {
    pub fn new(host: IpAddr, port: u16) -> Self {
        Self { host, port }
    }

    /// Socket address for the listener
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_binds_localhost_3333() {
        let config = ServerConfig::default();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3333");
    }
}
