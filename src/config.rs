//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::path::PathBuf;

use crate::records::{DEFAULT_PAGE_LIMIT, MAX_RESULTS};

/// Drive direct-download URL of the published catalogue document.
pub const DEFAULT_DOCUMENT_URL: &str =
    "https://drive.google.com/uc?export=download&id=1aeeOJVc4qff00rdRaLZZAg2PSbJbma0u";

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// URL of the remote catalogue document
    pub document_url: String,
    /// Local catalogue file; overrides `document_url` when set
    pub document_path: Option<PathBuf>,
    /// Bearer token sent with the document request
    pub document_token: Option<String>,
    /// Fetch timeout in seconds
    pub fetch_timeout: u64,
    /// Cap on rows returned by substring searches
    pub max_results: usize,
    /// Page size when the caller omits `limit`
    pub default_page_limit: usize,
    /// Fetch the catalogue at startup instead of on the first request
    pub preload: bool,
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `PORT` / `SERVER_PORT` - HTTP server port (default: 5000)
    /// - `DOCUMENT_URL` - Remote catalogue URL (default: the published Drive document)
    /// - `DOCUMENT_PATH` - Local catalogue file, takes precedence over the URL
    /// - `DOCUMENT_TOKEN` - Optional bearer token for the download
    /// - `FETCH_TIMEOUT` - Download timeout in seconds (default: 30)
    /// - `MAX_RESULTS` - Search result cap (default: 20)
    /// - `DEFAULT_PAGE_LIMIT` - Listing page size (default: 50)
    /// - `PRELOAD` - `true`/`1` to fetch at startup (default: false)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: parse_var("PORT")
                .or_else(|| parse_var("SERVER_PORT"))
                .unwrap_or(defaults.server_port),
            document_url: non_empty_var("DOCUMENT_URL").unwrap_or(defaults.document_url),
            document_path: non_empty_var("DOCUMENT_PATH").map(PathBuf::from),
            document_token: non_empty_var("DOCUMENT_TOKEN"),
            fetch_timeout: parse_var("FETCH_TIMEOUT").unwrap_or(defaults.fetch_timeout),
            max_results: parse_var("MAX_RESULTS").unwrap_or(defaults.max_results),
            default_page_limit: parse_var::<usize>("DEFAULT_PAGE_LIMIT")
                .filter(|limit| *limit > 0)
                .unwrap_or(defaults.default_page_limit),
            preload: env::var("PRELOAD")
                .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(defaults.preload),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 5000,
            document_url: DEFAULT_DOCUMENT_URL.to_string(),
            document_path: None,
            document_token: None,
            fetch_timeout: 30,
            max_results: MAX_RESULTS,
            default_page_limit: DEFAULT_PAGE_LIMIT,
            preload: false,
        }
    }
}
