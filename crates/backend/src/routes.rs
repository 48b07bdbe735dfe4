use axum::{
    extract::DefaultBodyLimit,
    http::{header::HeaderName, HeaderValue, Method},
    middleware,
    routing::{get, post},
    Router,
};
use contracts::usecases::u501_upload_document::UPLOAD_PATH;
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, CorsLayer};

use crate::handlers;
use crate::shared::config::CorsConfig;
use crate::shared::logger::request_logger;
use crate::usecases::u501_upload_document::UploadExecutor;

/// Room for multipart boundaries and part headers on top of the file itself
const MULTIPART_OVERHEAD: usize = 64 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub upload: Arc<UploadExecutor>,
}

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: AppState, cors: &CorsConfig) -> Router {
    let body_limit = state.upload.max_file_bytes() + MULTIPART_OVERHEAD;

    Router::new()
        .route("/", get(handlers::u501_upload_document::root))
        .route("/health", get(|| async { "ok" }))
        .route(
            UPLOAD_PATH,
            post(handlers::u501_upload_document::upload)
                .layer(DefaultBodyLimit::max(body_limit)),
        )
        .layer(cors_layer(cors))
        .layer(middleware::from_fn(request_logger))
        .with_state(state)
}

fn cors_layer(cors: &CorsConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = cors
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        // credentials are incompatible with a wildcard, so request headers are mirrored
        .allow_headers(AllowHeaders::mirror_request())
        .expose_headers([HeaderName::from_static("content-length")])
        .allow_credentials(true)
}
