//! Scrape orchestration: pagination, post limits, downloads.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::sleep;
use url::Url;

use crate::api::RedditClient;
use crate::config::{validate_post_limit, validate_subreddit_url, Config, SortMode};
use crate::error::Result;
use crate::media::{extract_media_urls, MediaFile};
use crate::scrape::progress::ProgressTracker;

/// Drives a scrape run against one subreddit.
///
/// One run executes at a time per instance; the progress tracker is shared
/// with concurrent readers through [`Scraper::progress`].
pub struct Scraper {
    client: RedditClient,
    progress: Arc<ProgressTracker>,
    page_delay: Duration,
    show_downloads: bool,
}

impl Scraper {
    /// Create a scraper from configuration.
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            client: RedditClient::new(&config.client)?,
            progress: Arc::new(ProgressTracker::new()),
            page_delay: Duration::from_millis(config.options.page_delay_ms),
            show_downloads: config.options.show_downloads,
        })
    }

    /// Handle for reading live progress while a run executes.
    pub fn progress(&self) -> Arc<ProgressTracker> {
        Arc::clone(&self.progress)
    }

    /// Scrape media from a subreddit until `post_limit` media-bearing posts
    /// have been processed or the listing is exhausted.
    ///
    /// Posts without extractable media do not count toward the limit, so the run may
    /// page much further through the listing than `post_limit` suggests.
    pub async fn scrape(
        &self,
        subreddit_url: &str,
        sort: SortMode,
        post_limit: u64,
    ) -> Result<Vec<MediaFile>> {
        let url = validate_subreddit_url(subreddit_url)?;
        validate_post_limit(post_limit)?;

        self.progress.reset();

        match self.run(&url, sort, post_limit).await {
            Ok(files) => {
                let snapshot = self.progress.snapshot();
                self.progress.set_action(format!(
                    "Complete! Found {} files from {} posts",
                    snapshot.files_found, snapshot.posts_processed
                ));
                Ok(files)
            }
            Err(e) => {
                // Leave the failure visible to status readers, then surface it
                self.progress.set_action(format!("Error: {}", e));
                Err(e)
            }
        }
    }

    async fn run(&self, url: &Url, sort: SortMode, post_limit: u64) -> Result<Vec<MediaFile>> {
        let mut files = Vec::new();
        let mut cursor: Option<String> = None;
        let mut processed = 0u64;

        loop {
            self.progress.set_action("Fetching posts...");
            let page = self.client.fetch_page(url, sort, cursor.as_deref()).await?;

            if page.posts.is_empty() {
                tracing::debug!("listing returned no posts, stopping");
                break;
            }

            for post in &page.posts {
                // Only media-bearing posts count toward the limit
                let Some(media_urls) = extract_media_urls(post) else {
                    continue;
                };

                processed += 1;
                self.progress
                    .set_action(format!("Processing post {}/{}", processed, post_limit));

                for (index, media_url) in media_urls.iter().enumerate() {
                    match self.client.download(media_url).await {
                        Ok((content, content_type)) => {
                            let file = MediaFile::new(
                                &post.id,
                                index,
                                media_url,
                                content,
                                content_type,
                                post.title.clone(),
                            );
                            if self.show_downloads {
                                tracing::info!("downloaded {}", file.filename);
                            }
                            files.push(file);
                            self.progress.record_file();
                        }
                        Err(e) => {
                            // A failed URL never aborts the post or the run
                            tracing::warn!("error downloading {}: {}", media_url, e);
                        }
                    }
                }

                self.progress.record_post();

                if processed >= post_limit {
                    return Ok(files);
                }
            }

            cursor = page.after;
            if cursor.is_none() {
                tracing::debug!("no further pages, stopping");
                break;
            }

            sleep(self.page_delay).await;
        }

        Ok(files)
    }
}
