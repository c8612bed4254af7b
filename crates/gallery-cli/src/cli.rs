//! CLI argument definitions for the gallery.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "gallery",
    version,
    about = "Photo gallery - browse, paginate and edit photo items",
    long_about = "Load a list of photo items from a URL or JSON file, page through them,\n\
                  and replay edit scripts against the in-memory collection."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v info, -vv debug, -vvv trace, -q errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Configuration file (default: gallery.toml in the user config dir).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Load the gallery and print one page.
    List(ListArgs),

    /// Load the gallery, replay an edit script, and print the resulting page.
    Edit(EditArgs),

    /// Print how many pages the gallery has.
    Pages(SourceArgs),
}

#[derive(Args, Clone, Default)]
pub struct SourceArgs {
    /// URL or JSON file to load items from (overrides the config file).
    #[arg(long = "source", value_name = "URL|PATH")]
    pub source: Option<String>,

    /// Items per page (overrides the config file).
    #[arg(long = "page-size", value_name = "N")]
    pub page_size: Option<usize>,
}

#[derive(Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Page to show; out-of-range pages are clamped.
    #[arg(long = "page", default_value_t = 1)]
    pub page: usize,
}

#[derive(Args)]
pub struct EditArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// JSON file with the edit steps to replay.
    #[arg(long = "script", value_name = "FILE")]
    pub script: PathBuf,

    /// Page to show after the edits.
    #[arg(long = "page", default_value_t = 1)]
    pub page: usize,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use tracing::level_filters::LevelFilter;

    use super::*;

    fn level(args: &[&str]) -> LevelFilter {
        Cli::try_parse_from(args)
            .unwrap()
            .verbosity
            .tracing_level_filter()
    }

    #[test]
    fn verbosity_flags_step_up_from_warn() {
        assert_eq!(level(&["gallery", "pages"]), LevelFilter::WARN);
        assert_eq!(level(&["gallery", "-v", "pages"]), LevelFilter::INFO);
        assert_eq!(level(&["gallery", "-vv", "pages"]), LevelFilter::DEBUG);
        assert_eq!(level(&["gallery", "-vvv", "pages"]), LevelFilter::TRACE);
        assert_eq!(level(&["gallery", "-q", "pages"]), LevelFilter::ERROR);
    }
}
