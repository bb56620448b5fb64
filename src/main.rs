//! Reddit Downloader - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use reddit_downloader::{
    cli::Args,
    config::{validation::subreddit_name, Config},
    error::{exit_codes, Error, Result},
    fs::save_files,
    output::{print_banner, print_error, print_info, print_run_summary, print_warning, ProgressDisplay},
    Scraper,
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            let code = match e {
                Error::Config(_) | Error::TomlParse(_) => exit_codes::CONFIG_ERROR,
                e if e.is_invalid_input() => exit_codes::INVALID_INPUT,
                Error::Upstream(_) => exit_codes::UPSTREAM_ERROR,
                Error::Download(_) => exit_codes::DOWNLOAD_ERROR,
                _ => exit_codes::UNEXPECTED_ERROR,
            };
            ExitCode::from(code as u8)
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    // Print banner
    print_banner();

    // Load configuration
    let mut config = if args.config.exists() {
        Config::load(&args.config)?
    } else {
        Config::default()
    };

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    let url = reddit_downloader::config::validate_subreddit_url(&args.url)?;
    print_info(&format!(
        "Scraping r/{} ({}, {} posts)",
        subreddit_name(&url),
        args.sort,
        args.limit
    ));

    // Run the scrape with a live progress display
    let scraper = Scraper::new(&config)?;
    let display = ProgressDisplay::spawn(scraper.progress());
    let result = scraper.scrape(&args.url, args.sort, args.limit).await;
    display.finish();

    let files = result?;
    if files.is_empty() {
        print_warning("No media files found");
        return Ok(());
    }

    // Write results to disk
    let output_dir = config.output_directory();
    save_files(&files, &output_dir).await?;

    let snapshot = scraper.progress().snapshot();
    print_run_summary(
        snapshot.posts_processed,
        snapshot.files_found,
        &output_dir.display().to_string(),
    );

    Ok(())
}
