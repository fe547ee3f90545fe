// src/lookup/session.rs
// =============================================================================
// This module runs lookups and holds the result of the latest one.
//
// A lookup moves through a small state machine:
//
//   Idle / Success / Failed --(non-empty username)--> Loading
//   Loading --(fetch ok)----> Success   (tally computed before entering)
//   Loading --(fetch error)-> Failed    (nothing from the lookup is kept)
//
// Lookups may overlap (the interactive prompt spawns one task per line).
// Each lookup gets a generation number when it starts; only the lookup
// holding the current generation may write its result. Older lookups still
// run to completion, but their results are dropped.
//
// Rust concepts:
// - Arc: share one immutable result between the session and its readers
// - Mutex: guard the state; it is never held across an .await
// =============================================================================

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::github::{FetchError, FetchedProfile, HttpTransport, ProfileFetcher, Username};
use crate::stats::{aggregate, LanguageTally};

use super::state::{LookupResult, LookupState};

/// Proof that a lookup was started, used to commit its result.
#[derive(Debug)]
pub struct LookupTicket {
    username: Username,
    generation: u64,
}

/// What happened to a call to [`LookupSession::lookup`].
#[derive(Debug, Clone)]
pub enum LookupOutcome {
    /// The username was empty; nothing was requested and the state is unchanged.
    Ignored,
    /// A newer lookup started while this one was in flight; its result was dropped.
    Superseded { username: Username },
    /// This lookup committed; holds the new Success or Failed state.
    Completed(LookupState),
}

struct Inner {
    generation: u64,
    state: LookupState,
}

pub struct LookupSession<T> {
    fetcher: ProfileFetcher<T>,
    inner: Mutex<Inner>,
}

impl<T: HttpTransport> LookupSession<T> {
    pub fn new(fetcher: ProfileFetcher<T>) -> Self {
        LookupSession {
            fetcher,
            inner: Mutex::new(Inner {
                generation: 0,
                state: LookupState::Idle,
            }),
        }
    }

    /// A copy of the current state.
    pub fn snapshot(&self) -> LookupState {
        self.lock().state.clone()
    }

    /// Starts a lookup: enters Loading and hands out a ticket for the new
    /// generation. Returns None (and changes nothing) for an empty username.
    pub fn begin(&self, username: &str) -> Option<LookupTicket> {
        let username = Username::parse(username)?;
        let mut inner = self.lock();

        inner.generation += 1;
        inner.state = LookupState::Loading {
            username: username.clone(),
            generation: inner.generation,
        };

        Some(LookupTicket {
            username,
            generation: inner.generation,
        })
    }

    /// Commits a fetch outcome and returns the committed state. Returns None,
    /// leaving the state alone, when a newer lookup has started since
    /// `ticket` was issued.
    pub fn commit(
        &self,
        ticket: &LookupTicket,
        outcome: Result<FetchedProfile, FetchError>,
    ) -> Option<LookupState> {
        // Computed before taking the lock so the swap below is the only write
        let next = match outcome {
            Ok(fetched) => {
                let languages: LanguageTally = aggregate(&fetched.repositories);
                LookupState::Success(Arc::new(LookupResult {
                    profile: fetched.profile,
                    repositories: fetched.repositories,
                    languages,
                }))
            }
            Err(error) => LookupState::Failed {
                username: ticket.username.clone(),
                message: error.to_string(),
            },
        };

        let mut inner = self.lock();
        if inner.generation != ticket.generation {
            return None;
        }
        inner.state = next.clone();
        Some(next)
    }

    /// Runs a whole lookup: begin, fetch, commit.
    pub async fn lookup(&self, username: &str) -> LookupOutcome {
        match self.begin(username) {
            Some(ticket) => self.run(ticket).await,
            None => LookupOutcome::Ignored,
        }
    }

    /// Fetches and commits a lookup that was already started with [`begin`](Self::begin).
    pub async fn run(&self, ticket: LookupTicket) -> LookupOutcome {
        let outcome = self.fetcher.fetch_user(&ticket.username).await;

        match self.commit(&ticket, outcome) {
            Some(state) => LookupOutcome::Completed(state),
            None => LookupOutcome::Superseded {
                username: ticket.username,
            },
        }
    }

    // A panic while holding the lock cannot leave a half-written state
    // (every write is a single assignment), so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a generation number instead of cancelling the old lookup?
//    - Dropping a future cancels it, but a spawned task owns its future
//    - Comparing two integers under the lock is enough to reject a late result
//    - The late lookup finishes its requests and its result is dropped
//
// 2. What is PoisonError::into_inner?
//    - A Mutex becomes "poisoned" if a thread panics while holding it
//    - into_inner() gives us the guard anyway
//
// 3. Why does commit() build the next state before locking?
//    - aggregate() does real work; the lock only covers the generation check
//      and the assignment
// -----------------------------------------------------------------------------
