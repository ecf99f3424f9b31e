//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;

/// Default database location, relative to the working directory.
pub const DEFAULT_DATABASE_PATH: &str = "data/movies.db";

/// Command-line interface for the movie catalog.
///
/// This is the top-level parser that handles global options and dispatches
/// to subcommands.
#[derive(Parser)]
#[command(name = "moviweb")]
#[command(about = "Keep per-user lists of favorite movies")]
#[command(version)]
pub struct Cli {
    /// Path to the SQLite database file
    #[arg(
        long,
        env = "MOVIWEB_DATABASE",
        default_value = DEFAULT_DATABASE_PATH,
        global = true
    )]
    pub database: PathBuf,

    /// Print results as JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
