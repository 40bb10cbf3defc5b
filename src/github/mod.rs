// src/github/mod.rs
// =============================================================================
// This module handles everything that talks to GitHub.
//
// Currently implements:
// - Fetching a user profile (GET /users/{username})
// - Fetching the first page of public repositories
// - Downloading the avatar image
//
// Rust concepts:
// - Modules: Organizing related functionality
// - Public API: What other parts of the app can use
// =============================================================================

mod client;
mod models;

// Re-export the pieces main.rs and the renderers need
pub use client::{FetchError, GitHubClient};
pub use models::{RepositorySummary, UserProfile, NOT_AVAILABLE};
