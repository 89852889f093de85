//! Server configuration module

use clap::Parser;
use thiserror::Error;

use crate::config::{
    cors::{AllowedOrigins, CorsConfig},
    db::DatabaseConfig,
    observability::{LoggingConfig, ObservabilityConfig},
    server::ServerRuntimeConfig,
};

pub(crate) mod cors;
pub(crate) mod db;
pub(crate) mod observability;
pub(crate) mod server;

/// Errors raised while loading server configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Arguments or environment could not be parsed.
    #[error(transparent)]
    Parse(#[from] clap::Error),

    /// An `ALLOWED_ORIGINS` entry is not a valid header value.
    #[error("invalid allowed origin {origin:?}")]
    AllowedOrigin {
        /// The rejected entry.
        origin: String,
    },
}

/// Product catalog JSON API server configuration
#[derive(Debug, Parser)]
#[command(name = "catalog-json", about = "Product Catalog JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Observability (traces/metrics) settings.
    #[command(flatten)]
    pub observability: ObservabilityConfig,

    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// Cross-origin settings.
    #[command(flatten)]
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed or an allowed
    /// origin is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        let config = Self::try_parse()?;

        config.allowed_origins()?;

        Ok(config)
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }

    /// Parsed cross-origin allow list.
    ///
    /// # Errors
    ///
    /// Returns an error when an origin entry is not a valid header value.
    pub fn allowed_origins(&self) -> Result<AllowedOrigins, ConfigError> {
        self.cors.allowed_origins()
    }
}
