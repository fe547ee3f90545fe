// src/github/fetch.rs
// =============================================================================
// This module fetches a user's profile and repositories from GitHub.
//
// Strategy:
// - Request the profile first; a non-success status means "user not found"
//   and we stop right there (no second request)
// - Then request up to 100 repositories, most recently updated first
// - Validate the second response too: an error status or a payload that is
//   not a list of repositories fails the whole lookup
//
// The two requests are sequential on purpose: the repositories are only
// worth asking for once we know the user exists.
// =============================================================================

use serde::de::DeserializeOwned;

use super::endpoints::{FetcherConfig, Username};
use super::error::FetchError;
use super::models::{FetchedProfile, RepositorySummary, UserProfile};
use super::transport::{HttpReply, HttpTransport};

/// Fetches profiles through any [`HttpTransport`].
pub struct ProfileFetcher<T> {
    config: FetcherConfig,
    transport: T,
}

impl<T: HttpTransport> ProfileFetcher<T> {
    pub fn new(config: FetcherConfig, transport: T) -> Self {
        ProfileFetcher { config, transport }
    }

    /// Fetches the profile and repositories for `username`.
    ///
    /// An empty username is not an error: nothing is requested and
    /// `Ok(None)` comes back.
    pub async fn fetch_profile(
        &self,
        username: &str,
    ) -> Result<Option<FetchedProfile>, FetchError> {
        match Username::parse(username) {
            Some(username) => self.fetch_user(&username).await.map(Some),
            None => Ok(None),
        }
    }

    /// Same as [`fetch_profile`](Self::fetch_profile) for an already validated username.
    pub async fn fetch_user(&self, username: &Username) -> Result<FetchedProfile, FetchError> {
        let reply = self.transport.get(&self.config.user_url(username)).await?;

        if !reply.status.is_success() {
            return Err(FetchError::UserNotFound {
                username: username.to_string(),
                status: reply.status,
            });
        }

        let profile: UserProfile = decode(&reply, "user profile")?;
        let repositories = self.fetch_repositories(username).await?;

        Ok(FetchedProfile {
            profile,
            repositories,
        })
    }

    async fn fetch_repositories(
        &self,
        username: &Username,
    ) -> Result<Vec<RepositorySummary>, FetchError> {
        let reply = self.transport.get(&self.config.repos_url(username)).await?;

        if !reply.status.is_success() {
            return Err(FetchError::RepositoriesUnavailable {
                username: username.to_string(),
                status: reply.status,
            });
        }

        // Server order (most recently updated first) is kept as-is
        decode(&reply, "repository list")
    }
}

// Decodes a JSON body, naming what we expected in the error
fn decode<D: DeserializeOwned>(reply: &HttpReply, what: &str) -> Result<D, FetchError> {
    serde_json::from_str(&reply.body)
        .map_err(|e| FetchError::MalformedResponse(format!("{}: {}", what, e)))
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why is ProfileFetcher generic over T?
//    - T is the transport (reqwest in the binary, a scripted fake in tests)
//    - Generics are resolved at compile time, so there is no boxing cost
//
// 2. What is DeserializeOwned?
//    - A serde bound meaning "can be decoded without borrowing from the input"
//    - We need it because the body String is dropped after decoding
//
// 3. Why return Option inside the Result?
//    - Err = the lookup failed
//    - Ok(None) = there was nothing to look up (empty username)
//    - Ok(Some(..)) = we got the data
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::testing::{profile_json, repo_json, ScriptedTransport};
    use reqwest::StatusCode;

    const USER_URL: &str = "https://api.github.com/users/octocat";
    const REPOS_URL: &str = "https://api.github.com/users/octocat/repos?per_page=100&sort=updated";

    fn fetcher(transport: ScriptedTransport) -> ProfileFetcher<ScriptedTransport> {
        ProfileFetcher::new(FetcherConfig::default(), transport)
    }

    #[tokio::test]
    async fn test_empty_username_issues_no_request() {
        let transport = ScriptedTransport::new();
        let fetcher = fetcher(transport.clone());

        assert_eq!(fetcher.fetch_profile("").await, Ok(None));
        assert_eq!(fetcher.fetch_profile("   ").await, Ok(None));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_user_not_found_skips_repositories() {
        let transport = ScriptedTransport::new()
            .reply(USER_URL, StatusCode::NOT_FOUND, r#"{"message":"Not Found"}"#);
        let fetcher = fetcher(transport.clone());

        let err = fetcher.fetch_profile("octocat").await.unwrap_err();
        assert_eq!(
            err,
            FetchError::UserNotFound {
                username: "octocat".to_string(),
                status: StatusCode::NOT_FOUND,
            }
        );
        assert_eq!(transport.requests(), vec![USER_URL.to_string()]);
    }

    #[tokio::test]
    async fn test_success_keeps_server_order() {
        let repos = format!(
            "[{},{},{}]",
            repo_json(3, "newest", Some("Rust")),
            repo_json(2, "middle", None),
            repo_json(1, "oldest", Some("Go")),
        );
        let transport = ScriptedTransport::new()
            .reply(USER_URL, StatusCode::OK, &profile_json("octocat"))
            .reply(REPOS_URL, StatusCode::OK, &repos);
        let fetcher = fetcher(transport.clone());

        let fetched = fetcher.fetch_profile("octocat").await.unwrap().unwrap();
        assert_eq!(fetched.profile.login, "octocat");
        let names: Vec<_> = fetched.repositories.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["newest", "middle", "oldest"]);
        assert_eq!(
            transport.requests(),
            vec![USER_URL.to_string(), REPOS_URL.to_string()]
        );
    }

    #[tokio::test]
    async fn test_zero_repositories_is_valid() {
        let transport = ScriptedTransport::new()
            .reply(USER_URL, StatusCode::OK, &profile_json("octocat"))
            .reply(REPOS_URL, StatusCode::OK, "[]");

        let fetched = fetcher(transport).fetch_profile("octocat").await.unwrap().unwrap();
        assert!(fetched.repositories.is_empty());
    }

    #[tokio::test]
    async fn test_repositories_error_status_fails_lookup() {
        let transport = ScriptedTransport::new()
            .reply(USER_URL, StatusCode::OK, &profile_json("octocat"))
            .reply(
                REPOS_URL,
                StatusCode::FORBIDDEN,
                r#"{"message":"API rate limit exceeded"}"#,
            );

        let err = fetcher(transport).fetch_profile("octocat").await.unwrap_err();
        assert_eq!(
            err,
            FetchError::RepositoriesUnavailable {
                username: "octocat".to_string(),
                status: StatusCode::FORBIDDEN,
            }
        );
    }

    #[tokio::test]
    async fn test_error_object_instead_of_array_is_malformed() {
        let transport = ScriptedTransport::new()
            .reply(USER_URL, StatusCode::OK, &profile_json("octocat"))
            .reply(REPOS_URL, StatusCode::OK, r#"{"message":"oops"}"#);

        let err = fetcher(transport).fetch_profile("octocat").await.unwrap_err();
        assert!(matches!(err, FetchError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_unparseable_profile_is_malformed() {
        let transport = ScriptedTransport::new().reply(USER_URL, StatusCode::OK, "<html>");
        let fetcher = fetcher(transport.clone());

        let err = fetcher.fetch_profile("octocat").await.unwrap_err();
        assert!(matches!(err, FetchError::MalformedResponse(msg) if msg.starts_with("user profile")));
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_transport_failure_is_network_error() {
        // Nothing scripted: the transport reports a connection failure
        let transport = ScriptedTransport::new();

        let err = fetcher(transport).fetch_profile("octocat").await.unwrap_err();
        assert!(matches!(err, FetchError::NetworkError(_)));
    }
}
