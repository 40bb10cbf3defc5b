// src/render/profile.rs
// =============================================================================
// Builds the right-hand column of the card: the profile fields followed by
// the top starred repositories.
//
// Output (before coloring), one String per terminal line:
//
//   Username: octocat
//   Name: The Octocat
//   Bio: A very long bio that does not fit on a single line of the card
//        so it continues here, aligned under the first word
//   ...
//   Profile URL: https://github.com/octocat
//
//   Top Repositories:
//   ⭐ Hello-World (1500) — My first repository on GitHub!
// =============================================================================

use chrono::DateTime;

use super::palette::Field;
use super::wrap::{sanitize, truncate, wrap};
use crate::github::{RepositorySummary, UserProfile, NOT_AVAILABLE};

/// Values longer than this many chars continue on the next line
pub const WRAP_WIDTH: usize = 50;

/// How many repositories the card lists
pub const TOP_REPOS: usize = 5;

/// Longest description shown before it is cut with "..."
pub const DESCRIPTION_MAX: usize = 40;

// Formats the profile and the top repositories into styled lines
pub fn format_profile(profile: &UserProfile, repositories: &[RepositorySummary]) -> Vec<String> {
    let mut lines = Vec::new();

    for field in Field::PROFILE_ROWS {
        lines.extend(format_field(field, &field_value(field, profile)));
    }

    lines.push(String::new());
    lines.push(
        Field::RepoHeader
            .style()
            .apply_to(Field::RepoHeader.label())
            .to_string(),
    );

    for repo in top_repositories(repositories, TOP_REPOS) {
        lines.push(format_repository(repo));
    }

    lines
}

// The raw (unstyled) text shown after a field's label
fn field_value(field: Field, profile: &UserProfile) -> String {
    match field {
        Field::Username => profile.login().to_string(),
        Field::Name => profile.name().to_string(),
        Field::Bio => profile.bio().to_string(),
        Field::Location => profile.location().to_string(),
        Field::PublicRepos => profile.public_repos().to_string(),
        Field::Followers => profile.followers().to_string(),
        Field::Following => profile.following().to_string(),
        Field::Created => format_created(profile.created_at()),
        Field::ProfileUrl => profile.profile_url().to_string(),
        Field::RepoHeader | Field::RepoEntry => String::new(),
    }
}

// Renders "Label: value", wrapping long values
//
// Continuation lines are indented by the label's width plus one space so
// the text lines up under the first line's value. Each line is styled on
// its own, so no escape sequence spans two lines.
pub fn format_field(field: Field, value: &str) -> Vec<String> {
    let style = field.style();
    let label = field.label();
    let indent = " ".repeat(label.chars().count() + 1);

    let mut wrapped = wrap(&sanitize(value), WRAP_WIDTH).into_iter();
    let first = wrapped.next().unwrap_or_default();

    let mut lines = vec![style.apply_to(format!("{} {}", label, first)).to_string()];
    lines.extend(wrapped.map(|rest| style.apply_to(format!("{}{}", indent, rest)).to_string()));
    lines
}

// Turns "2011-01-25T18:44:36Z" into "25 January 2011"
//
// Month names come from chrono's built-in English table, so the result does
// not depend on the system locale. Unparsable input falls back to its first
// 10 characters (the date part of an ISO timestamp).
pub fn format_created(created_at: &str) -> String {
    let created_at = created_at.trim();
    if created_at.is_empty() {
        return NOT_AVAILABLE.to_string();
    }

    match DateTime::parse_from_rfc3339(created_at) {
        Ok(date) => date.format("%d %B %Y").to_string(),
        Err(_) => created_at.chars().take(10).collect(),
    }
}

// Returns the `count` most starred repositories
//
// sort_by is stable, so repositories with equal stars keep the order
// GitHub returned them in.
pub fn top_repositories(repositories: &[RepositorySummary], count: usize) -> Vec<&RepositorySummary> {
    let mut sorted: Vec<&RepositorySummary> = repositories.iter().collect();
    sorted.sort_by(|a, b| b.stars.cmp(&a.stars));
    sorted.truncate(count);
    sorted
}

// "⭐ name (stars) — description", or without the dash part when the
// repository has no description
pub fn format_repository(repo: &RepositorySummary) -> String {
    let headline = Field::RepoEntry
        .style()
        .apply_to(format!("⭐ {} ({})", sanitize(&repo.name), repo.stars))
        .to_string();

    let description = repo
        .short_description()
        .map(sanitize)
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty());

    match description {
        Some(description) => format!("{} — {}", headline, truncate(&description, DESCRIPTION_MAX)),
        None => headline,
    }
}
