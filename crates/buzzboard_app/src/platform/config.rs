//! Startup configuration. Each value is resolved once when the app starts
//! and never re-read per request.

use std::path::PathBuf;

const DEFAULT_API_BASE: &str = "http://localhost:8000";
const DEFAULT_PAGE_PATH: &str = "./buzzboard.html";

/// Origin of the items API, from `BUZZBOARD_API_BASE`.
pub fn api_base() -> String {
    std::env::var("BUZZBOARD_API_BASE")
        .ok()
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
}

/// Where the rendered dashboard page is written, from `BUZZBOARD_OUT`.
pub fn page_path() -> PathBuf {
    std::env::var_os("BUZZBOARD_OUT")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_PAGE_PATH))
}
