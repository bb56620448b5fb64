//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, SortMode};

/// Subreddit media downloader CLI.
#[derive(Parser, Debug)]
#[command(
    name = "reddit-downloader",
    version,
    about = "Download media from subreddit listings",
    long_about = "A CLI tool to download images, gifs, and videos linked from subreddit posts.\n\n\
                  Handles direct links, galleries, hosted video, and crossposts."
)]
pub struct Args {
    /// Subreddit URL to scrape (e.g. https://www.reddit.com/r/pics).
    pub url: String,

    /// Listing sort order: hot, new, rising, controversial, top or top/<period>
    /// where <period> is hour, day, week, month, year, or all.
    #[arg(short, long, default_value = "hot")]
    pub sort: SortMode,

    /// Number of media-bearing posts to process.
    #[arg(short, long, default_value_t = 25)]
    pub limit: u64,

    /// Directory to write downloaded files into.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Delay between listing page fetches, in milliseconds.
    #[arg(long)]
    pub page_delay: Option<u64>,

    /// Hide per-file download logging.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(&self, config: &mut Config) {
        if let Some(dir) = &self.output {
            config.options.output_directory = Some(dir.clone());
        }

        if let Some(delay) = self.page_delay {
            config.options.page_delay_ms = delay;
        }

        if self.quiet {
            config.options.show_downloads = false;
        }
    }
}
