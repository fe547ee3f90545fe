// src/github/endpoints.rs
// =============================================================================
// Where requests go: the API base URL, the username path segment and the
// two endpoints a lookup needs.
//
//   GET {api}/users/{username}
//   GET {api}/users/{username}/repos?per_page=100&sort=updated
//
// Rust concepts:
// - Newtypes: `Username` can only be built from a non-empty string
// - url::Url: path segments are percent-encoded for us
// =============================================================================

use anyhow::{anyhow, Context, Result};
use std::fmt;
use url::Url;

/// Public GitHub REST API
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// GitHub's maximum page size; we never ask for a second page
pub const REPOS_PER_PAGE: u8 = 100;

/// A non-empty, trimmed GitHub handle.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    /// Returns None for an empty (or all-whitespace) input.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Username(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Settings for the profile fetcher
//
// Built from command-line flags; Default points at the public API.
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    api_base: Url,
    per_page: u8,
    user_agent: String,
}

impl FetcherConfig {
    /// Creates a config for an API base URL such as
    /// "https://api.github.com" or "https://ghe.example.com/api/v3".
    pub fn new(api_url: &str) -> Result<Self> {
        let api_base = Url::parse(api_url)
            .with_context(|| format!("Invalid API URL '{}'", api_url))?;

        if api_base.cannot_be_a_base() || !matches!(api_base.scheme(), "http" | "https") {
            return Err(anyhow!("API URL must be an http(s) URL: {}", api_url));
        }

        Ok(FetcherConfig {
            api_base,
            per_page: REPOS_PER_PAGE,
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
        })
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// `GET /users/{username}`
    pub fn user_url(&self, username: &Username) -> Url {
        self.endpoint(&["users", username.as_str()])
    }

    /// `GET /users/{username}/repos?per_page=100&sort=updated`
    pub fn repos_url(&self, username: &Username) -> Url {
        let mut url = self.endpoint(&["users", username.as_str(), "repos"]);
        url.query_pairs_mut()
            .append_pair("per_page", &self.per_page.to_string())
            .append_pair("sort", "updated");
        url
    }

    // Appends path segments to the base, keeping any base path (e.g. /api/v3)
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.api_base.clone();
        url.set_query(None);
        // new() rejects cannot-be-a-base URLs, so this always succeeds
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

impl Default for FetcherConfig {
    fn default() -> Self {
        FetcherConfig::new(DEFAULT_API_URL).expect("default API URL is valid")
    }
}
