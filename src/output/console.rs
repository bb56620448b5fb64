//! Console output utilities.

use console::style;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("OK").green().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the application banner.
pub fn print_banner() {
    let banner = r#"
╔═══════════════════════════════════════════════╗
║     Reddit Downloader                         ║
║     Subreddit media scraper                   ║
╚═══════════════════════════════════════════════╝
"#;
    println!("{}", style(banner).cyan());
}

/// Print a summary of a completed run.
pub fn print_run_summary(posts: u64, files: u64, output_dir: &str) {
    println!();
    println!("{}", style("Run summary:").bold());
    println!("  Posts processed: {}", posts);
    println!("  Files found:     {}", files);
    println!("  Saved to:        {}", output_dir);
    println!();
}
