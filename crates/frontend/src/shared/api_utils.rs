//! API utilities for frontend-backend communication
//!
//! The backend origin is injected at build time:
//! `UPLOAD_API_BASE=https://quiz.example.com trunk build --release`

/// Origin used when `UPLOAD_API_BASE` was not set during the build
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Get the base URL for API requests, without a trailing slash
pub fn api_base() -> String {
    normalize_base(option_env!("UPLOAD_API_BASE").unwrap_or(DEFAULT_API_BASE))
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust
/// use frontend::shared::api_utils::api_url;
///
/// let url = api_url("/upload");
/// assert!(url.ends_with("/upload"));
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

fn normalize_base(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE.to_string()
    } else {
        trimmed.to_string()
    }
}
