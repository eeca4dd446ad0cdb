use actix_cors::Cors;

pub const ALLOWED_METHODS: [&str; 5] = ["GET", "POST", "PUT", "DELETE", "OPTIONS"];
pub const ALLOWED_HEADERS: [&str; 4] =
    ["X-Requested-With", "Content-Type", "Authorization", "CORRELATIONID"];

/// Permissive cross-origin policy wrapped around the whole app.
///
/// Any origin is accepted and echoed back with credentials allowed.
/// Pre-flights are left to the routes that declare an `OPTIONS` handler, so
/// undeclared paths answer them with 404 like any other method.
pub fn cors() -> Cors {
    Cors::default()
        .disable_preflight()
        .allow_any_origin()
        .supports_credentials()
        .allowed_methods(ALLOWED_METHODS)
        .allowed_headers(ALLOWED_HEADERS)
        .max_age(3600)
}
