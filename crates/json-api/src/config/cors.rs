//! CORS Config

use clap::Args;
use salvo::http::HeaderValue;

use super::ConfigError;

/// Cross-origin settings.
#[derive(Debug, Args)]
pub struct CorsConfig {
    /// Allowed origins: `*` or a comma-separated list
    #[arg(long, env = "ALLOWED_ORIGINS", default_value = "*")]
    pub allowed_origins: String,
}

/// Parsed origin allow list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowedOrigins {
    /// Every origin is accepted.
    Any,

    /// Only the listed origins are accepted.
    List(Vec<HeaderValue>),
}

impl CorsConfig {
    /// Parse the configured origins.
    ///
    /// # Errors
    ///
    /// Returns an error when an entry is not a valid header value.
    pub fn allowed_origins(&self) -> Result<AllowedOrigins, ConfigError> {
        parse_allowed_origins(&self.allowed_origins)
    }
}

fn parse_allowed_origins(raw: &str) -> Result<AllowedOrigins, ConfigError> {
    if raw.trim() == "*" {
        return Ok(AllowedOrigins::Any);
    }

    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|_invalid| ConfigError::AllowedOrigin {
                origin: origin.to_owned(),
            })
        })
        .collect::<Result<Vec<_>, _>>()
        .map(AllowedOrigins::List)
}
