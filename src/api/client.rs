//! HTTP client for the listing API and media hosts.

use futures::StreamExt;
use reqwest::Client;
use url::Url;

use crate::api::types::{Listing, ListingPage};
use crate::config::{ClientConfig, SortMode};
use crate::error::{Error, Result};

/// Page size requested from the listing endpoint. The upstream serves pages
/// of this size regardless of how many posts the caller still needs.
pub const LISTING_PAGE_SIZE: u32 = 25;

/// Client for subreddit listings and media downloads.
pub struct RedditClient {
    client: Client,
}

impl RedditClient {
    /// Create a new client from configuration.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Fetch one page of posts from a subreddit listing.
    ///
    /// The returned cursor is `None` when the upstream reports no further
    /// pages or the page came back empty.
    pub async fn fetch_page(
        &self,
        subreddit_url: &Url,
        sort: SortMode,
        cursor: Option<&str>,
    ) -> Result<ListingPage> {
        let base = subreddit_url.as_str().trim_end_matches('/');
        let url = format!("{}/{}.json", base, sort.path());

        let mut query: Vec<(&str, String)> = vec![
            ("raw_json", "1".to_string()),
            ("limit", LISTING_PAGE_SIZE.to_string()),
        ];
        if let Some(period) = sort.time_period() {
            query.push(("t", period.to_string()));
        }
        if let Some(after) = cursor {
            query.push(("after", after.to_string()));
        }

        tracing::debug!("GET {} (cursor: {:?})", url, cursor);

        let response = self.client.get(&url).query(&query).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Upstream(format!(
                "listing request failed: HTTP {} for {}",
                status, url
            )));
        }

        let text = response.text().await?;
        let listing: Listing = serde_json::from_str(&text).map_err(|e| {
            Error::Upstream(format!(
                "failed to parse listing: {} - Response: {}",
                e,
                &text[..text.len().min(500)]
            ))
        })?;

        let posts: Vec<_> = listing
            .data
            .children
            .into_iter()
            .map(|wrapper| wrapper.data)
            .collect();

        // An empty continuation token means the same as a missing one
        let after = if posts.is_empty() {
            None
        } else {
            listing.data.after.filter(|token| !token.is_empty())
        };

        tracing::debug!("fetched {} posts, next cursor: {:?}", posts.len(), after);

        Ok(ListingPage { posts, after })
    }

    /// Download a media file into memory, returning its bytes and the
    /// content type reported by the host.
    pub async fn download(&self, url: &str) -> Result<(Vec<u8>, String)> {
        let response = self.client.get(url).send().await.map_err(|e| {
            Error::Download(format!("request for {} failed: {}", url, e))
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Download(format!(
                "failed to download {}: HTTP {}",
                url, status
            )));
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("application/octet-stream")
            .to_string();

        let mut content = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| Error::Download(format!("stream error: {}", e)))?;
            content.extend_from_slice(&chunk);
        }

        Ok((content, content_type))
    }
}
