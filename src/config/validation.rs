//! Input validation logic.

use regex::Regex;
use url::Url;

use crate::error::{Error, Result};

/// Maximum number of media-bearing posts a single run may request.
pub const MAX_POST_LIMIT: u64 = 1000;

/// Validate a subreddit URL.
///
/// Accepts `http(s)://[www.]<host>/r/<name>[/]`; anything else is rejected
/// before any network activity.
pub fn validate_subreddit_url(input: &str) -> Result<Url> {
    let url = Url::parse(input).map_err(|_| Error::InvalidUrl(input.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(Error::InvalidUrl(input.to_string()));
    }

    let host = url
        .host_str()
        .ok_or_else(|| Error::InvalidUrl(input.to_string()))?;

    let location = match url.port() {
        Some(port) => format!("{}:{}{}", host, port, url.path()),
        None => format!("{}{}", host, url.path()),
    };

    // Host plus a /r/<name> path, optionally with a trailing slash
    let pattern = Regex::new(r"^(?:www\.)?[\w.-]+(?::\d+)?/r/[\w-]+/?$").unwrap();
    if !pattern.is_match(&location) {
        return Err(Error::InvalidUrl(input.to_string()));
    }

    Ok(url)
}

/// Validate the requested post limit.
pub fn validate_post_limit(limit: u64) -> Result<()> {
    if limit == 0 {
        return Err(Error::InvalidLimit(
            "post limit must be at least 1".to_string(),
        ));
    }

    if limit > MAX_POST_LIMIT {
        return Err(Error::InvalidLimit(format!(
            "post limit must be at most {} (got {})",
            MAX_POST_LIMIT, limit
        )));
    }

    Ok(())
}

/// Extract the subreddit name from a validated URL, for display purposes.
pub fn subreddit_name(url: &Url) -> String {
    url.path()
        .trim_matches('/')
        .strip_prefix("r/")
        .unwrap_or("unknown")
        .to_string()
}
