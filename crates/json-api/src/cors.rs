//! Cross-origin request handling.

use salvo::cors::{AllowHeaders, AllowMethods, AllowOrigin, Cors, CorsHandler};

use crate::config::cors::AllowedOrigins;

/// Build the CORS handler for the configured origins.
///
/// Credentials are allowed, so a wildcard origin mirrors the request origin
/// instead of answering `*`.
pub(crate) fn handler(origins: AllowedOrigins) -> CorsHandler {
    let allow_origin = match origins {
        AllowedOrigins::Any => AllowOrigin::mirror_request(),
        AllowedOrigins::List(origins) => AllowOrigin::list(origins),
    };

    Cors::new()
        .allow_origin(allow_origin)
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .into_handler()
}
