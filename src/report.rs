// src/report.rs
// =============================================================================
// Turns a finished lookup into something to print.
//
// Two flavours, like most CLIs:
// - Human-readable text: profile card, language chart, latest repositories
// - JSON (--json): the same data, for scripts and other tools
//
// Nothing here decides anything; it only formats what the lookup produced.
// =============================================================================

use chrono::DateTime;
use serde::Serialize;
use std::fmt::Write;

use crate::github::{RepositorySummary, UserProfile};
use crate::lookup::LookupResult;
use crate::stats::{ChartSlice, LanguageTally};

/// How many repository cards the report shows by default
pub const DEFAULT_REPO_COUNT: usize = 6;

const BAR_WIDTH: usize = 24;

#[derive(Serialize)]
struct ProfileReport<'a> {
    profile: &'a UserProfile,
    languages: &'a LanguageTally,
    chart: Vec<ChartSlice>,
    repositories: &'a [RepositorySummary],
}

#[derive(Serialize)]
struct LanguagesReport<'a> {
    login: &'a str,
    languages: &'a LanguageTally,
    chart: Vec<ChartSlice>,
}

/// The full report as text.
pub fn render_profile(result: &LookupResult, repo_count: usize) -> String {
    let profile = &result.profile;
    let mut out = String::new();

    let _ = writeln!(out, "👤 {}", profile.display_name());
    let _ = writeln!(out, "   @{}", profile.login);
    if let Some(bio) = profile.bio.as_deref().filter(|b| !b.trim().is_empty()) {
        let _ = writeln!(out, "   {}", bio.trim());
    }
    let _ = writeln!(
        out,
        "   📍 {}",
        profile.location.as_deref().unwrap_or("Not specified")
    );
    let _ = writeln!(out, "   🖼️  {}", profile.avatar_url);
    let _ = writeln!(
        out,
        "   Followers: {}   Following: {}   Public Repos: {}",
        profile.followers, profile.following, profile.public_repos
    );

    if !result.languages.is_empty() {
        let _ = writeln!(out);
        out.push_str(&render_languages(&result.languages));
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "📦 Latest Repositories");
    let _ = writeln!(out, "{}", "=".repeat(60));
    if result.repositories.is_empty() {
        let _ = writeln!(out, "   No public repositories");
    }
    for repo in result.repositories.iter().take(repo_count) {
        out.push_str(&render_repository(repo));
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "🔗 View Full Profile: {}", profile.html_url);
    out
}

/// The language statistics as a text bar chart.
pub fn render_languages(tally: &LanguageTally) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "📊 Language Statistics");
    let _ = writeln!(out, "{}", "=".repeat(60));

    let slices = tally.chart_slices();
    if slices.is_empty() {
        let _ = writeln!(out, "   No languages detected");
        return out;
    }

    let name_width = slices.iter().map(|s| s.language.len()).max().unwrap_or(0);
    for slice in &slices {
        let _ = writeln!(
            out,
            "   {:<width$}  {}  {:>5.1}% ({})",
            slice.language,
            bar(slice.percent),
            slice.percent,
            slice.count,
            width = name_width
        );
    }
    out
}

fn render_repository(repo: &RepositorySummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "   {}", repo.name);
    let _ = writeln!(
        out,
        "      {}",
        repo.description
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or("No description available")
    );
    let _ = write!(out, "      ⭐ {}   🔄 {}", repo.stargazers_count, repo.forks_count);
    if let Some(language) = repo.primary_language() {
        let _ = write!(out, "   {}", language);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "      Updated: {}", format_date(&repo.updated_at));
    let _ = writeln!(out, "      {}", repo.html_url);
    out
}

// Filled portion rounds to the nearest cell
fn bar(percent: f64) -> String {
    let filled = ((percent / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

/// Formats an ISO 8601 timestamp as a short US date ("Mar 1, 2024").
/// Anything unparseable is shown as-is.
pub fn format_date(timestamp: &str) -> String {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => timestamp.to_string(),
    }
}

/// The full report as pretty-printed JSON, repositories truncated to `repo_count`.
pub fn profile_json(result: &LookupResult, repo_count: usize) -> serde_json::Result<String> {
    let shown = repo_count.min(result.repositories.len());
    serde_json::to_string_pretty(&ProfileReport {
        profile: &result.profile,
        languages: &result.languages,
        chart: result.languages.chart_slices(),
        repositories: &result.repositories[..shown],
    })
}

/// Only the language statistics, as pretty-printed JSON.
pub fn languages_json(login: &str, tally: &LanguageTally) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&LanguagesReport {
        login,
        languages: tally,
        chart: tally.chart_slices(),
    })
}
