use std::env;
use std::path::Path;

// Default configuration constants
pub const DEFAULT_API_BASE_URL: &str = "";
pub const DEFAULT_FALLBACK_BASE_URL: &str = "http://localhost:8080";

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        dotenvy::from_path(Path::new(path)).ok();
    } else {
        dotenvy::dotenv().ok();
    }
}

pub fn get_api_base_url() -> String {
    sanitize_base_url(&env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()))
}

/// Whether an API base URL was explicitly configured.
pub fn has_api_base_url() -> bool {
    env::var("API_BASE_URL")
        .map(|v| !v.trim().is_empty())
        .unwrap_or(false)
}

pub fn sanitize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_FALLBACK_BASE_URL.to_string()
    } else {
        trimmed.to_string()
    }
}
