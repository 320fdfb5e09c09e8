//! Command-line interface definitions for Headline Watch.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! Options can also be provided via environment variables.

use clap::Parser;

/// Command-line arguments for the Headline Watch application.
///
/// # Examples
///
/// ```sh
/// # Poll every 60 seconds (the default) and print readable blocks
/// headline_watch
///
/// # Poll every 5 minutes, emit JSON lines
/// headline_watch --interval 300 --json
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Seconds to wait between poll cycles
    #[arg(short, long, env = "HEADLINE_WATCH_INTERVAL", default_value_t = 60)]
    pub interval: u64,

    /// Emit reported items as JSON lines instead of readable blocks
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["headline_watch"]);
        assert_eq!(cli.interval, 60);
        assert!(!cli.json);
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::parse_from(["headline_watch", "--interval", "300", "--json"]);
        assert_eq!(cli.interval, 300);
        assert!(cli.json);
    }

    #[test]
    fn test_cli_short_interval_flag() {
        let cli = Cli::parse_from(["headline_watch", "-i", "10"]);
        assert_eq!(cli.interval, 10);
    }
}
