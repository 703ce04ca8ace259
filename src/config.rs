//! Server configuration

use clap::Parser;

/// Where and how the projection server listens
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "serve", about = "Serve the portfolio projection form")]
pub struct ServerConfig {
    /// Interface to bind
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// Verbose request logging
    #[arg(long, env = "DEBUG")]
    pub debug: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            debug: false,
        }
    }
}

impl ServerConfig {
    /// `host:port` for display and binding
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Log filter used when `RUST_LOG` is not set
    pub fn default_log_filter(&self) -> &'static str {
        if self.debug {
            "debug"
        } else {
            "info"
        }
    }
}
