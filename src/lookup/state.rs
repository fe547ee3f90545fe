// src/lookup/state.rs
// The value a lookup session holds. Each transition replaces it wholesale.

use std::sync::Arc;

use crate::github::{RepositorySummary, UserProfile, Username};
use crate::stats::LanguageTally;

/// Everything one successful lookup produced. Never modified after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct LookupResult {
    pub profile: UserProfile,
    /// Most recently updated first, as returned by the API
    pub repositories: Vec<RepositorySummary>,
    pub languages: LanguageTally,
}

#[derive(Debug, Clone)]
pub enum LookupState {
    Idle,
    Loading { username: Username, generation: u64 },
    Success(Arc<LookupResult>),
    /// Profile, repositories and tally are all gone; only the message remains.
    Failed { username: Username, message: String },
}

impl LookupState {
    /// The committed result, if the last lookup succeeded.
    pub fn result(&self) -> Option<&Arc<LookupResult>> {
        match self {
            LookupState::Success(result) => Some(result),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LookupState::Loading { .. })
    }
}
