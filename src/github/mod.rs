// src/github/mod.rs
// =============================================================================
// This module talks to the GitHub REST API.
//
// Currently implements:
// - Building the profile and repository endpoints (endpoints.rs)
// - Decoding the records we display (models.rs)
// - A swappable HTTP transport with a reqwest implementation (transport.rs)
// - The two-step profile + repositories fetch (fetch.rs)
// =============================================================================

mod endpoints;
mod error;
mod fetch;
mod models;
mod transport;

#[cfg(test)]
pub(crate) mod testing;

pub use endpoints::{FetcherConfig, Username, DEFAULT_API_URL};
pub use error::FetchError;
pub use fetch::ProfileFetcher;
pub use models::{FetchedProfile, RepositorySummary, UserProfile};
pub use transport::{HttpTransport, ReqwestTransport};
