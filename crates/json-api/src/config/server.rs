//! Server Config

use clap::{Args, builder::BoolishValueParser};

/// Server runtime network settings.
#[derive(Debug, Args)]
pub struct ServerRuntimeConfig {
    /// Server host address
    #[arg(short = 'H', long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Server port
    #[arg(short, long, env = "PORT", default_value = "8000")]
    pub port: u16,

    /// Development auto-reload flag
    #[arg(long, env = "RELOAD", default_value_t = false, value_parser = BoolishValueParser::new())]
    pub reload: bool,
}

impl ServerRuntimeConfig {
    /// Get the socket address for binding.
    #[must_use]
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
