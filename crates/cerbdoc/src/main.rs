//! Cerbdoc CLI - documentation symbols from the command line.
//!
//! Cerbdoc parses `.cerberusdoc` files into symbol records and answers
//! queries over the resulting index: search, per-document symbols, token
//! extraction, and structural checks.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

mod cli;

/// Cerbdoc: documentation symbol index and query interface.
#[derive(Parser)]
#[command(name = "cerbdoc")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Workspace root directory (defaults to current directory)
    #[arg(short, long, global = true)]
    workspace: Option<PathBuf>,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Index documentation files in the workspace and report statistics
    Index,

    /// Search for documented symbols by name
    Search {
        /// Search query (substring, case-insensitive)
        query: String,

        /// Maximum number of results
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// List the symbols of a single documentation file
    Symbols {
        /// Documentation file to parse
        file: PathBuf,

        /// Emit JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Extract fallback completion tokens from a file
    Tokens {
        /// File to scan
        file: PathBuf,

        /// Token pattern (defaults to identifiers of length >= 3)
        #[arg(short, long)]
        pattern: Option<String>,
    },

    /// Check documentation code samples for structural problems
    Check {
        /// Files to check (defaults to every doc in the workspace)
        files: Vec<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    // Determine workspace root
    let workspace = match cli.workspace {
        Some(w) => w,
        None => match std::env::current_dir() {
            Ok(dir) => dir,
            Err(e) => {
                eprintln!(
                    "{}: failed to get current directory: {e}",
                    "error".red().bold()
                );
                return ExitCode::FAILURE;
            }
        },
    };

    // Run the appropriate command
    let result = match cli.command {
        Commands::Index => cli::index::run(&workspace),
        Commands::Search { query, limit } => cli::search::run(&workspace, &query, limit),
        Commands::Symbols { file, json } => cli::symbols::run(&file, json),
        Commands::Tokens { file, pattern } => cli::tokens::run(&file, pattern.as_deref()),
        Commands::Check { files } => cli::check::run(&workspace, &files),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {e}", "error".red().bold());
            // Show cause chain for nested errors
            let mut source = std::error::Error::source(&e);
            while let Some(cause) = source {
                eprintln!("  {}: {cause}", "caused by".dimmed());
                source = std::error::Error::source(cause);
            }
            ExitCode::FAILURE
        }
    }
}
