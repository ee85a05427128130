use actix_cors::Cors;

use crate::config::Config;

/// CORS policy for the API. Development accepts any origin; every other
/// environment only accepts the configured client.
pub fn cors_for(config: &Config) -> Cors {
    if config.is_development() {
        return Cors::permissive();
    }

    Cors::default()
        .allowed_origin(&config.client_base_url)
        .allowed_methods(vec!["GET", "OPTIONS"])
        .allowed_headers(vec![
            "Content-Type",
            "Accept",
            "X-Requested-With",
            "X-Correlation-ID",
        ])
        .max_age(3600)
}
