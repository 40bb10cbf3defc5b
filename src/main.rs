// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Fetch the profile and repositories from the GitHub API
// 3. Download the avatar and render both columns
// 4. Print the card
// 5. Exit with proper code (0 = success, 1 = error, 2 = bad usage)
//
// Only a failed profile fetch stops the program. A missing avatar or
// repository list just makes the card smaller.
//
// Rust concepts used:
// - async/await: Because our HTTP client is asynchronous
// - Result<T, E>: For error handling (T = success type, E = error type)
// - Generics: handle_card writes to any io::Write (stdout, or a Vec in tests)
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;      // src/cli.rs - command-line parsing
mod github;   // src/github/ - GitHub API client
mod render;   // src/render/ - avatar, profile text and card layout
mod terminal; // src/terminal.rs - ANSI support on Windows

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser; // Parser trait enables the parse() method
use colored::Colorize;

use cli::Cli;
use github::GitHubClient;
use render::AvatarRenderer;

// The #[tokio::main] attribute transforms our async main into a real main function
// It creates a tokio runtime and runs our async code inside it
#[tokio::main]
async fn main() {
    // Logs go to stderr; RUST_LOG=debug shows every request
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let exit_code = match run().await {
        Ok(()) => 0,
        Err(e) => {
            // Nothing of the card has been printed at this point
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            1
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
//
// clap exits on its own (code 2) when the arguments are wrong, so by the
// time we get past Cli::parse() we have a username.
async fn run() -> Result<()> {
    let cli = Cli::parse();

    terminal::enable_ansi_support();

    let client = GitHubClient::new()?;
    log::debug!("Using GitHub API at {}", client.base_url());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    handle_card(&client, &cli.username, &AvatarRenderer::default(), &mut out).await
}

// Fetches everything for `username` and prints the card to `out`
//
// Returns an error (and writes nothing) when the profile can't be fetched.
async fn handle_card<W: Write>(
    client: &GitHubClient,
    username: &str,
    avatar: &AvatarRenderer,
    out: &mut W,
) -> Result<()> {
    log::info!("Fetching GitHub profile for: {}", username);

    // The two API calls don't depend on each other, so run them together
    let (user, repos) = futures::join!(
        client.fetch_user(username),
        client.fetch_repositories(username)
    );
    let user = user?;

    log::debug!(
        "Fetched {} with {} repositories; rendering avatar at {}x{}",
        user.login(),
        repos.len(),
        avatar.size(),
        avatar.size()
    );

    let avatar_bytes = client.download_avatar(user.avatar_url()).await;
    let avatar_lines = avatar.render(avatar_bytes.as_deref());
    let info_lines = render::format_profile(&user, &repos);

    let rows = render::merge_columns(&avatar_lines, &info_lines, avatar.visible_width());

    let login = if user.login().is_empty() {
        username
    } else {
        user.login()
    };
    render::print_card(out, login, &rows)?;

    Ok(())
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why does handle_card take `out: &mut W` instead of printing directly?
//    - println! always goes to the real stdout
//    - Writing to a generic io::Write lets tests pass a Vec<u8> and check
//      exactly what would have been printed
//
// 2. What does futures::join! do?
//    - It polls both futures at the same time and waits for both to finish
//    - Unlike tokio::spawn, no new tasks are created; both run in this one
//
// 3. Why is `user?` after the join and not inside it?
//    - fetch_repositories never fails (it returns an empty Vec instead)
//    - fetch_user can fail, and `?` turns its FetchError into anyhow::Error
// -----------------------------------------------------------------------------
