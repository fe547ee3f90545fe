// src/lookup/mod.rs
// =============================================================================
// This module ties the fetcher and the language tally together into a
// "lookup": one attempt to show a user's profile.
//
// Submodules:
// - state: the immutable value describing where the latest lookup stands
// - session: starts lookups and lets only the newest one commit
// =============================================================================

mod session;
mod state;

pub use session::{LookupOutcome, LookupSession};
pub use state::{LookupResult, LookupState};
