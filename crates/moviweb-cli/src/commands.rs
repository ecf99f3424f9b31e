//! Commands enum and subcommands.
//!
//! This module defines the available commands for the CLI tool.

use clap::Subcommand;

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Manage users
    Users {
        #[command(subcommand)]
        command: UserCommand,
    },

    /// Manage a user's favorite movies
    Movies {
        #[command(subcommand)]
        command: MovieCommand,
    },

    /// Suggest titles resembling a (possibly misspelled) title
    Suggest {
        /// Title to search for
        title: String,
    },
}

/// User command variants.
#[derive(Subcommand)]
pub enum UserCommand {
    /// Register a new user
    Add {
        /// Display name
        name: String,
    },
    /// List all users
    List,
}

/// Movie command variants.
#[derive(Subcommand)]
pub enum MovieCommand {
    /// List every movie across all users
    All,
    /// List a user's movies
    List {
        /// ID of the owning user
        user_id: i64,
    },
    /// Look up a title on OMDb and add it to a user's list
    Add {
        /// ID of the owning user
        user_id: i64,
        /// Title to look up
        title: String,
    },
    /// Change a movie's title
    Rename {
        /// ID of the movie
        movie_id: i64,
        /// New title
        title: String,
    },
    /// Remove a movie
    Delete {
        /// ID of the movie
        movie_id: i64,
    },
}
