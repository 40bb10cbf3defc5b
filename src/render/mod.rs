// src/render/mod.rs
// =============================================================================
// This module turns fetched data into terminal output.
//
// Submodules:
// - avatar: image bytes -> lines of colored "██" blocks
// - profile: profile + repositories -> lines of styled text
// - card: glues both columns together and prints them
// - palette: the fixed color of every profile field
// - wrap: plain text helpers (sanitize, wrap, truncate)
//
// Every renderer returns Vec<String>, one String per terminal line. That
// keeps them independent of each other and easy to test.
// =============================================================================

mod avatar;
mod card;
mod palette;
mod profile;
mod wrap;

pub use avatar::AvatarRenderer;
pub use card::{merge_columns, print_card};
pub use profile::format_profile;
