// src/github/testing.rs
// In-memory transport and JSON fixtures shared by the fetcher and session tests.

use async_trait::async_trait;
use reqwest::StatusCode;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;
use url::Url;

use super::error::FetchError;
use super::transport::{HttpReply, HttpTransport};

#[derive(Default)]
struct Script {
    replies: HashMap<String, HttpReply>,
    gates: HashMap<String, Arc<Notify>>,
    requests: Vec<String>,
}

/// Answers GETs from a fixed table and records every requested URL.
/// Unknown URLs fail like a refused connection.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    script: Arc<Mutex<Script>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, url: &str, status: StatusCode, body: &str) -> Self {
        self.script.lock().unwrap().replies.insert(
            url.to_string(),
            HttpReply {
                status,
                body: body.to_string(),
            },
        );
        self
    }

    /// Holds requests for `url` until the returned Notify is signalled.
    pub fn gate(&self, url: &str) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.script
            .lock()
            .unwrap()
            .gates
            .insert(url.to_string(), gate.clone());
        gate
    }

    pub fn requests(&self) -> Vec<String> {
        self.script.lock().unwrap().requests.clone()
    }
}

#[async_trait]
impl HttpTransport for ScriptedTransport {
    async fn get(&self, url: &Url) -> Result<HttpReply, FetchError> {
        let gate = {
            let mut script = self.script.lock().unwrap();
            script.requests.push(url.to_string());
            script.gates.get(url.as_str()).cloned()
        };

        if let Some(gate) = gate {
            gate.notified().await;
        }

        self.script
            .lock()
            .unwrap()
            .replies
            .get(url.as_str())
            .cloned()
            .ok_or_else(|| FetchError::NetworkError(format!("connection refused: {}", url)))
    }
}

pub fn profile_json(login: &str) -> String {
    serde_json::json!({
        "login": login,
        "name": format!("{} (test)", login),
        "avatar_url": format!("https://avatars.example.com/{}", login),
        "bio": "Writes code",
        "location": null,
        "followers": 10,
        "following": 2,
        "public_repos": 3,
        "html_url": format!("https://github.com/{}", login),
    })
    .to_string()
}

pub fn repo_json(id: u64, name: &str, language: Option<&str>) -> String {
    serde_json::json!({
        "id": id,
        "name": name,
        "description": null,
        "language": language,
        "stargazers_count": id * 10,
        "forks_count": id,
        "updated_at": "2024-03-01T12:00:00Z",
        "html_url": format!("https://github.com/octocat/{}", name),
    })
    .to_string()
}

pub fn repos_json(languages: &[Option<&str>]) -> String {
    let repos: Vec<String> = languages
        .iter()
        .enumerate()
        .map(|(i, lang)| repo_json(i as u64 + 1, &format!("repo-{}", i + 1), *lang))
        .collect();
    format!("[{}]", repos.join(","))
}
