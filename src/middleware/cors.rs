use actix_cors::Cors;

/// Dashboards are served from arbitrary origins, so any origin, method and header is accepted.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
        .max_age(3600)
}
