// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Build the fetcher (API base URL + HTTP client) and a lookup session
// 3. Dispatch to the appropriate subcommand handler
// 4. Exit with proper code (0 = success, 1 = lookup failed, 2 = error)
//
// Progress and warnings go to stderr so stdout only carries the report
// (which keeps `--json` output machine-readable).
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli; // src/cli.rs - command-line parsing
mod github; // src/github/ - GitHub REST API access
mod interactive; // src/interactive.rs - the line-by-line prompt
mod lookup; // src/lookup/ - lookup state machine
mod report; // src/report.rs - text and JSON output
mod stats; // src/stats/ - language tally

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use github::{FetcherConfig, ProfileFetcher, ReqwestTransport};
use lookup::{LookupOutcome, LookupSession, LookupState};

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // Unexpected errors (bad flags, unreadable stdin, ...) exit with code 2
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Returns:
//   Ok(0) = lookup succeeded (or there was nothing to look up)
//   Ok(1) = lookup failed (unknown user, network error, ...)
//   Err   = unexpected error
async fn run() -> Result<i32> {
    let cli = Cli::parse();

    let config = FetcherConfig::new(&cli.api_url)?;
    let transport =
        ReqwestTransport::new(&config).context("Failed to create HTTP client")?;
    let fetcher = ProfileFetcher::new(config, transport);

    match cli.command {
        Commands::Profile {
            username,
            json,
            repos,
        } => handle_profile(LookupSession::new(fetcher), &username, json, repos).await,
        Commands::Languages { username, json } => {
            handle_languages(&fetcher, &username, json).await
        }
        Commands::Interactive { repos } => {
            let session = Arc::new(LookupSession::new(fetcher));
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            interactive::run_interactive(session, stdin, repos).await?;
            Ok(0)
        }
    }
}

// Handles the 'profile' subcommand: the full report
async fn handle_profile(
    session: LookupSession<ReqwestTransport>,
    username: &str,
    json: bool,
    repo_count: usize,
) -> Result<i32> {
    let Some(state) = run_lookup(&session, username).await else {
        return Ok(0);
    };

    match state {
        LookupState::Success(result) => {
            if json {
                println!("{}", report::profile_json(&result, repo_count)?);
            } else {
                println!("{}", report::render_profile(&result, repo_count));
            }
            Ok(0)
        }
        _ => Ok(1),
    }
}

// Handles the 'languages' subcommand: fetch, tally, print.
// A single one-shot lookup, so it skips the session entirely.
async fn handle_languages(
    fetcher: &ProfileFetcher<ReqwestTransport>,
    username: &str,
    json: bool,
) -> Result<i32> {
    eprintln!("🔍 Looking up GitHub user: {}", username.trim());

    let fetched = match fetcher.fetch_profile(username).await {
        Ok(Some(fetched)) => fetched,
        Ok(None) => {
            eprintln!("⚠️  No username given, nothing to look up");
            return Ok(0);
        }
        Err(e) => {
            eprintln!("❌ {}", e);
            return Ok(1);
        }
    };

    let tally = stats::aggregate(&fetched.repositories);
    eprintln!(
        "📄 Counted {} of {} repositories",
        tally.total(),
        fetched.repositories.len()
    );

    if json {
        println!("{}", report::languages_json(&fetched.profile.login, &tally)?);
    } else {
        println!("{}", report::render_languages(&tally));
    }
    Ok(0)
}

// Runs one lookup and reports progress on stderr.
// Returns None when the username was empty and nothing was requested.
async fn run_lookup(
    session: &LookupSession<ReqwestTransport>,
    username: &str,
) -> Option<LookupState> {
    eprintln!("🔍 Looking up GitHub user: {}", username.trim());

    match session.lookup(username).await {
        LookupOutcome::Ignored => {
            eprintln!("⚠️  No username given, nothing to look up");
            None
        }
        LookupOutcome::Superseded { username } => {
            // Not expected here: only one lookup runs per invocation
            eprintln!("⏭️  Lookup for {} was replaced by a newer one", username);
            None
        }
        LookupOutcome::Completed(state) => {
            match &state {
                LookupState::Success(result) => eprintln!(
                    "📄 Found {} repositor{} in {} language(s)",
                    result.repositories.len(),
                    if result.repositories.len() == 1 { "y" } else { "ies" },
                    result.languages.len()
                ),
                LookupState::Failed { message, .. } => eprintln!("❌ {}", message),
                _ => {}
            }
            Some(state)
        }
    }
}
