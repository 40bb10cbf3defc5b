// src/github/models.rs
// =============================================================================
// Data structures for the two GitHub API responses we consume.
//
// Only the fields we actually display are listed here. serde ignores every
// other field in the JSON, so new fields added by GitHub don't break us.
//
// GitHub sends `null` for profile fields the user never filled in (name, bio,
// location...). Every field is therefore an Option (or has a serde default)
// and the fallback text lives in the accessor methods below.
// =============================================================================

use serde::Deserialize;

/// Shown for a missing name or bio
pub const NOT_AVAILABLE: &str = "N/A";

/// Shown for a missing location
pub const NOT_PROVIDED: &str = "Not Provided";

// A GitHub user profile from `GET /users/{username}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    login: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    bio: Option<String>,
    #[serde(default)]
    location: Option<String>,
    #[serde(default)]
    public_repos: Option<u64>,
    #[serde(default)]
    followers: Option<u64>,
    #[serde(default)]
    following: Option<u64>,
    /// ISO-8601 timestamp, e.g. "2011-01-25T18:44:36Z"
    #[serde(default)]
    created_at: Option<String>,
    #[serde(default)]
    html_url: Option<String>,
    #[serde(default)]
    avatar_url: Option<String>,
}

impl UserProfile {
    pub fn login(&self) -> &str {
        self.login.as_deref().unwrap_or("")
    }

    pub fn name(&self) -> &str {
        non_blank(&self.name).unwrap_or(NOT_AVAILABLE)
    }

    pub fn bio(&self) -> &str {
        non_blank(&self.bio).unwrap_or(NOT_AVAILABLE)
    }

    pub fn location(&self) -> &str {
        non_blank(&self.location).unwrap_or(NOT_PROVIDED)
    }

    pub fn public_repos(&self) -> u64 {
        self.public_repos.unwrap_or(0)
    }

    pub fn followers(&self) -> u64 {
        self.followers.unwrap_or(0)
    }

    pub fn following(&self) -> u64 {
        self.following.unwrap_or(0)
    }

    pub fn created_at(&self) -> &str {
        self.created_at.as_deref().unwrap_or("")
    }

    pub fn profile_url(&self) -> &str {
        self.html_url.as_deref().unwrap_or("")
    }

    pub fn avatar_url(&self) -> &str {
        self.avatar_url.as_deref().unwrap_or("")
    }
}

// One entry of `GET /users/{username}/repos`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RepositorySummary {
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "stargazers_count")]
    pub stars: u64,
    #[serde(default)]
    pub description: Option<String>,
}

impl RepositorySummary {
    // Only the first non-empty line of a description matters for display
    pub fn short_description(&self) -> Option<&str> {
        self.description
            .as_deref()
            .and_then(|d| d.lines().map(str::trim).find(|line| !line.is_empty()))
    }
}

// Treats "" and "   " the same as a missing value
fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}
