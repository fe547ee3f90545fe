// src/interactive.rs
// =============================================================================
// The interactive prompt: type a username, press Enter, get a report.
//
// How it works:
// 1. Read lines from the input (stdin in practice)
// 2. Start a lookup for each non-empty line, in input order
// 3. Run the fetch in a background task so the next line can be read
//    right away
// 4. If a newer line arrives before an older lookup finishes, the older
//    result is dropped when it comes back (the session enforces this)
// 5. At end of input, wait for the remaining lookups and return
//
// Rust concepts:
// - tokio::task::JoinSet: a group of spawned tasks we can wait on together
// - Arc: the session is shared between the reader loop and every task
// =============================================================================

use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::task::JoinSet;

use crate::github::HttpTransport;
use crate::lookup::{LookupOutcome, LookupSession, LookupState};
use crate::report;

/// Runs lookups for every line of `input` until it ends.
pub async fn run_interactive<T, R>(
    session: Arc<LookupSession<T>>,
    input: R,
    repo_count: usize,
) -> Result<()>
where
    T: HttpTransport + 'static,
    R: AsyncBufRead + Unpin,
{
    eprintln!("⌨️  Enter a GitHub username per line (Ctrl-D to quit)");

    let mut lines = input.lines();
    let mut tasks = JoinSet::new();

    while let Some(line) = lines.next_line().await.context("Failed to read input")? {
        let replacing = session.snapshot().is_loading();

        // begin() runs here, not in the task, so generations follow input order
        let Some(ticket) = session.begin(&line) else {
            continue;
        };

        if replacing {
            eprintln!("⏭️  Replacing the lookup still in progress");
        }
        eprintln!("🔍 Looking up {}...", line.trim());

        let session = session.clone();
        tasks.spawn(async move {
            let outcome = session.run(ticket).await;
            print_outcome(&outcome, repo_count);
        });
    }

    while let Some(joined) = tasks.join_next().await {
        if let Err(e) = joined {
            eprintln!("Warning: lookup task failed: {}", e);
        }
    }

    Ok(())
}

fn print_outcome(outcome: &LookupOutcome, repo_count: usize) {
    match outcome {
        LookupOutcome::Completed(state) => print_state(state, repo_count),
        LookupOutcome::Superseded { username } => {
            eprintln!("⏭️  Dropped the result for {} (a newer lookup started)", username);
        }
        LookupOutcome::Ignored => {}
    }
}

fn print_state(state: &LookupState, repo_count: usize) {
    if let Some(result) = state.result() {
        println!("{}", report::render_profile(result, repo_count));
    } else if let LookupState::Failed { message, .. } = state {
        eprintln!("❌ {}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::testing::{profile_json, repos_json, ScriptedTransport};
    use crate::github::{FetcherConfig, ProfileFetcher};
    use reqwest::StatusCode;

    const OCTOCAT_URL: &str = "https://api.github.com/users/octocat";
    const OCTOCAT_REPOS_URL: &str =
        "https://api.github.com/users/octocat/repos?per_page=100&sort=updated";
    const GHOST_URL: &str = "https://api.github.com/users/ghost";

    fn session(transport: ScriptedTransport) -> Arc<LookupSession<ScriptedTransport>> {
        Arc::new(LookupSession::new(ProfileFetcher::new(
            FetcherConfig::default(),
            transport,
        )))
    }

    #[tokio::test]
    async fn test_last_line_wins() {
        let transport = ScriptedTransport::new()
            .reply(OCTOCAT_URL, StatusCode::OK, &profile_json("octocat"))
            .reply(OCTOCAT_REPOS_URL, StatusCode::OK, &repos_json(&[Some("Rust")]))
            .reply(GHOST_URL, StatusCode::NOT_FOUND, "{}");
        let session = session(transport);

        let input: &[u8] = b"octocat\n\n   \nghost\n";
        run_interactive(session.clone(), input, 6).await.unwrap();

        match session.snapshot() {
            LookupState::Failed { username, .. } => assert_eq!(username.as_str(), "ghost"),
            other => panic!("expected ghost's failed lookup, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_blank_input_does_nothing() {
        let transport = ScriptedTransport::new();
        let session = session(transport.clone());

        let input: &[u8] = b"\n  \n";
        run_interactive(session.clone(), input, 6).await.unwrap();

        assert!(matches!(session.snapshot(), LookupState::Idle));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_single_lookup_commits() {
        let transport = ScriptedTransport::new()
            .reply(OCTOCAT_URL, StatusCode::OK, &profile_json("octocat"))
            .reply(
                OCTOCAT_REPOS_URL,
                StatusCode::OK,
                &repos_json(&[Some("Go"), Some("Go"), None]),
            );
        let session = session(transport);

        let input: &[u8] = b"octocat";
        run_interactive(session.clone(), input, 6).await.unwrap();

        let state = session.snapshot();
        let result = state.result().expect("lookup succeeded");
        assert_eq!(result.languages.get("Go"), Some(2));
    }
}
