//! Command-line interface.

pub mod commands;
pub mod output;
pub mod types;

pub use output::{output, CommandOutput};
pub use types::{Cli, Commands};

use console::style;

/// Report a terminal error and exit with a non-zero status.
///
/// Every error is terminal for the run; nothing is retried.
pub fn handle_error(err: anyhow::Error, json_mode: bool) -> ! {
    if json_mode {
        let payload = serde_json::json!({
            "success": false,
            "error": format!("{err:#}"),
        });
        eprintln!(
            "{}",
            serde_json::to_string_pretty(&payload).unwrap_or_default()
        );
    } else {
        eprintln!("{} {err:#}", style("error:").red().bold());
    }
    std::process::exit(1);
}
