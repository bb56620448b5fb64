//! Reddit Downloader - subreddit media scraper
//!
//! This library fetches posts from a subreddit listing, extracts embedded
//! media URLs from the various post shapes, and downloads the referenced
//! files into memory.
//!
//! # Features
//!
//! - Direct image/video links, imgur links, hosted images and video
//! - Gallery posts and crossposts
//! - Post limits that count only media-bearing posts
//! - Live progress snapshots readable while a run executes
//!
//! # Example
//!
//! ```no_run
//! use reddit_downloader::{Config, Scraper, SortMode};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let scraper = Scraper::new(&Config::default())?;
//!     let files = scraper
//!         .scrape("https://www.reddit.com/r/pics", SortMode::Hot, 10)
//!         .await?;
//!     println!("downloaded {} files", files.len());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod fs;
pub mod media;
pub mod output;
pub mod scrape;

// Re-exports for convenience
pub use api::RedditClient;
pub use config::{Config, SortMode, TimePeriod};
pub use error::{Error, Result};
pub use media::MediaFile;
pub use scrape::{ProgressSnapshot, ProgressTracker, Scraper};
