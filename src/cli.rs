// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// The whole interface is one positional argument:
//
//   github-card <USERNAME>
//
// clap takes care of --help, --version and of printing a usage message
// (and exiting with code 2) when the username is missing.
// =============================================================================

use clap::Parser;

// This struct represents our entire CLI application
#[derive(Parser, Debug)]
#[command(
    name = "github-card",
    version,
    about = "Print a GitHub user's avatar and profile as a card in the terminal",
    long_about = "github-card downloads a GitHub user's public profile, renders their avatar \
                  with true-color blocks and prints it next to their profile details and \
                  most starred repositories."
)]
pub struct Cli {
    /// GitHub username (e.g., octocat)
    #[arg(value_parser = parse_username)]
    pub username: String,
}

// Rejects values that can't possibly be a GitHub login
//
// An empty name would turn /users/{name} into /users/ (the list of all
// users), and a '/' would address a different endpoint entirely.
fn parse_username(value: &str) -> Result<String, String> {
    let value = value.trim();

    if value.is_empty() {
        return Err("username must not be empty".to_string());
    }
    if value.contains('/') {
        return Err(format!("'{}' is not a username (it contains '/')", value));
    }

    Ok(value.to_string())
}
