//! API route definitions

use crate::config::toml_config::CorsConfig;
use crate::http::handlers;
use crate::utils::error::{ConvertError, Result};
use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

pub fn api_routes() -> Router {
    Router::new()
        .route("/", get(handlers::welcome))
        .route("/r2a", get(handlers::roman_to_arabic))
        .route("/a2r", get(handlers::arabic_to_roman))
        .fallback(handlers::not_found)
}

pub fn cors_layer(config: &CorsConfig) -> Result<CorsLayer> {
    if config.is_permissive() {
        return Ok(CorsLayer::permissive());
    }

    let origins = config
        .allowed_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|e| ConvertError::InvalidConfigValueError {
                field: "cors.allowed_origins".to_string(),
                value: origin.clone(),
                reason: e.to_string(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::OPTIONS]))
}

/// Routes plus CORS and request tracing.
pub fn app(cors: &CorsConfig) -> Result<Router> {
    Ok(api_routes()
        .layer(cors_layer(cors)?)
        .layer(TraceLayer::new_for_http()))
}
