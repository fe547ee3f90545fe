// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
// =============================================================================

use clap::{Parser, Subcommand};

use crate::github::DEFAULT_API_URL;
use crate::report::DEFAULT_REPO_COUNT;

// This struct represents our entire CLI application
#[derive(Parser, Debug)]
#[command(
    name = "gh-visualizer",
    version,
    about = "Look up a GitHub user's profile, language usage and latest repositories",
    long_about = "gh-visualizer fetches a GitHub profile and up to 100 of the user's repositories, \
                  tallies the primary language of each repository and prints a profile card, \
                  a language chart and the most recently updated repositories."
)]
pub struct Cli {
    /// Base URL of the GitHub REST API (e.g. a GitHub Enterprise /api/v3 URL)
    #[arg(long, global = true, default_value = DEFAULT_API_URL)]
    pub api_url: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show a user's profile card, language statistics and latest repositories
    ///
    /// Example: gh-visualizer profile octocat --repos 10
    Profile {
        /// GitHub username to look up
        username: String,

        /// Output results in JSON format instead of text
        #[arg(long)]
        json: bool,

        /// How many of the most recently updated repositories to show
        #[arg(long, default_value_t = DEFAULT_REPO_COUNT)]
        repos: usize,
    },

    /// Show only the language statistics for a user
    ///
    /// Example: gh-visualizer languages octocat --json
    Languages {
        /// GitHub username to look up
        username: String,

        /// Output results in JSON format instead of text
        #[arg(long)]
        json: bool,
    },

    /// Read usernames from stdin, one per line, and look each one up
    ///
    /// A new line replaces a lookup that is still running. Empty lines are
    /// ignored; end of input (Ctrl-D) exits.
    Interactive {
        /// How many of the most recently updated repositories to show
        #[arg(long, default_value_t = DEFAULT_REPO_COUNT)]
        repos: usize,
    },
}
