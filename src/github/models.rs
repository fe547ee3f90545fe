// src/github/models.rs
// =============================================================================
// Records returned by the GitHub REST API.
//
// Only the fields we display are decoded; serde ignores the rest of the
// (rather large) payloads. Field names match the JSON keys so the same
// structs can be printed back out with --json.
// =============================================================================

use serde::{Deserialize, Serialize};

/// A GitHub account, from `GET /users/{username}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// The handle used as the lookup key
    pub login: String,
    pub name: Option<String>,
    pub avatar_url: String,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub followers: u64,
    pub following: u64,
    pub public_repos: u64,
    pub html_url: String,
}

impl UserProfile {
    /// The display name, falling back to the login when no name is set.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.login,
        }
    }
}

/// One repository, from `GET /users/{username}/repos`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositorySummary {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    /// Absent when GitHub could not classify the repository
    pub language: Option<String>,
    pub stargazers_count: u64,
    pub forks_count: u64,
    /// ISO 8601 timestamp, e.g. "2024-03-01T12:00:00Z"
    pub updated_at: String,
    pub html_url: String,
}

impl RepositorySummary {
    /// The primary language, treating an empty string the same as no language.
    pub fn primary_language(&self) -> Option<&str> {
        self.language.as_deref().filter(|lang| !lang.is_empty())
    }
}

/// A fetched profile together with its repositories, most recently updated first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedProfile {
    pub profile: UserProfile,
    pub repositories: Vec<RepositorySummary>,
}
