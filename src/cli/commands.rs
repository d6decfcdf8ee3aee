//! CLI commands and argument parsing

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Paginator CLI
#[derive(Parser, Debug)]
#[command(name = "paginator")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Display configuration file (YAML or JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format for `pages` and `info`
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print pagination markup
    Render {
        #[command(flatten)]
        args: PaginateArgs,

        /// Markup style: list, selectbox (aliases: select, mobile)
        #[arg(long)]
        view: Option<String>,
    },

    /// Print the page window
    Pages {
        #[command(flatten)]
        args: PaginateArgs,
    },

    /// Print page count, item range and adjacent pages
    Info {
        #[command(flatten)]
        args: PaginateArgs,
    },
}

/// Paginator inputs shared by every subcommand.
/// Flags override values from the config file.
#[derive(Args, Debug, Clone)]
pub struct PaginateArgs {
    /// Total number of items
    #[arg(short, long, allow_negative_numbers = true)]
    pub total: i64,

    /// Items per page
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    pub per_page: i64,

    /// Current page
    #[arg(short, long, default_value = "1", allow_negative_numbers = true)]
    pub page: i64,

    /// Maximum number of page numbers shown (at least 3)
    #[arg(short, long, allow_negative_numbers = true)]
    pub max_pages: Option<i64>,

    /// URL template for page links
    #[arg(short, long)]
    pub url_pattern: Option<String>,

    /// Placeholder token in the URL template
    #[arg(long)]
    pub placeholder: Option<String>,

    /// Previous-link label
    #[arg(long)]
    pub prev_text: Option<String>,

    /// Next-link label
    #[arg(long)]
    pub next_text: Option<String>,

    /// Ellipsis label
    #[arg(long)]
    pub ellipsis: Option<String>,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Human-readable output
    Pretty,
}
