use std::env;
use std::net::SocketAddr;

/// Default address the server binds to.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Server configuration from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `LARDER_BIND_ADDR`: Address to listen on (default: "0.0.0.0:3000")
    pub fn from_env() -> anyhow::Result<Self> {
        let raw = env::var("LARDER_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw
            .parse::<SocketAddr>()
            .map_err(|e| anyhow::anyhow!("Invalid LARDER_BIND_ADDR {:?}: {}", raw, e))?;
        Ok(Self { bind_addr })
    }
}
