use poem::middleware::Cors;
use std::env;

/// Initialize CORS middleware for cross-origin requests
///
/// Environment variables:
/// - CORS_ALLOWED_ORIGINS: Comma-separated list of allowed origins
///   (default: unset, every origin, method and header is accepted)
///
pub fn init_cors() -> Cors {
    build_cors(env::var("CORS_ALLOWED_ORIGINS").ok())
}

fn build_cors(allowed_origins: Option<String>) -> Cors {
    let origins: Vec<String> = allowed_origins
        .unwrap_or_default()
        .split(',')
        .map(|o| o.trim().to_string())
        .filter(|o| !o.is_empty())
        .collect();

    // poem's Cors accepts any origin, method and header until narrowed.
    if origins.is_empty() {
        return Cors::new();
    }

    Cors::new()
        .allow_origins(origins)
        .allow_methods(vec!["GET", "POST", "OPTIONS"])
        .allow_credentials(true)
}
