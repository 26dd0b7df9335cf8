//! lexlint CLI tool.
//!
//! Usage:
//! ```bash
//! lexlint check [OPTIONS] [PATHS]...
//! lexlint list-rules
//! lexlint serve --port 4567
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

/// Fast heuristic linter: line-attributed suggestions without a parser
#[derive(Parser)]
#[command(name = "lexlint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file (default: ./lexlint.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze files and print suggestions
    Check {
        /// Files or directories to analyze
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Only run specific rules (comma-separated)
        #[arg(long)]
        rules: Option<String>,

        /// File extensions to pick up when walking directories
        #[arg(long)]
        ext: Vec<String>,

        /// Exit with code 1 when any suggestion is emitted
        #[arg(long)]
        deny: bool,
    },

    /// List available rules
    ListRules,

    /// Serve the review endpoint over HTTP
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value_t = 4567)]
        port: u16,
    },
}

/// Output format for suggestions.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output, one document per file.
    Json,
    /// One-line-per-suggestion compact format.
    Compact,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Check {
            paths,
            format,
            rules,
            ext,
            deny,
        } => commands::check::run(&paths, format, rules, ext, deny, cli.config.as_deref()),
        Commands::ListRules => {
            commands::list_rules::run();
            Ok(())
        }
        Commands::Serve { port } => commands::serve::run(port),
    }
}
