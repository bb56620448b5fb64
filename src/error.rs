//! Error types for the reddit-downloader application.

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Input validation errors
    #[error("Invalid subreddit URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid post limit: {0}")]
    InvalidLimit(String),

    #[error("Invalid sort mode: {0}")]
    InvalidSort(String),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Upstream listing errors
    #[error("Upstream API error: {0}")]
    Upstream(String),

    // Per-URL download errors (recovered locally, never fatal to a run)
    #[error("Download failed: {0}")]
    Download(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    // URL parsing errors
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl Error {
    /// Whether this error means the caller's input was rejected before any
    /// network activity.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Error::InvalidUrl(_) | Error::InvalidLimit(_) | Error::InvalidSort(_)
        )
    }
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const CONFIG_ERROR: i32 = 2;
    pub const INVALID_INPUT: i32 = 3;
    pub const UPSTREAM_ERROR: i32 = 4;
    pub const DOWNLOAD_ERROR: i32 = 5;
    pub const UNEXPECTED_ERROR: i32 = 6;
}
