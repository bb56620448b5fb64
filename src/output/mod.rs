//! Console and progress output.

pub mod console;
pub mod progress;

pub use console::{print_banner, print_error, print_info, print_run_summary, print_success, print_warning};
pub use progress::ProgressDisplay;
