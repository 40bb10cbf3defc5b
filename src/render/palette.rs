// src/render/palette.rs
// =============================================================================
// The fixed color table for the profile column.
//
// Every line of the card belongs to one Field, and each Field always gets
// the same color. Neighbouring fields use different colors so the eye can
// separate them. The values themselves carry no meaning.
//
// Styles are forced on: the card is colored even when stdout is piped,
// which keeps the output identical between runs and in tests.
// =============================================================================

use console::{Color, Style};

/// Every styled piece of the profile column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Username,
    Name,
    Bio,
    Location,
    PublicRepos,
    Followers,
    Following,
    Created,
    ProfileUrl,
    RepoHeader,
    RepoEntry,
}

impl Field {
    /// The profile rows, in display order
    pub const PROFILE_ROWS: [Field; 9] = [
        Field::Username,
        Field::Name,
        Field::Bio,
        Field::Location,
        Field::PublicRepos,
        Field::Followers,
        Field::Following,
        Field::Created,
        Field::ProfileUrl,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::Username => "Username:",
            Field::Name => "Name:",
            Field::Bio => "Bio:",
            Field::Location => "Location:",
            Field::PublicRepos => "Public Repos:",
            Field::Followers => "Followers:",
            Field::Following => "Following:",
            Field::Created => "Created:",
            Field::ProfileUrl => "Profile URL:",
            Field::RepoHeader => "Top Repositories:",
            // Entries have no label of their own
            Field::RepoEntry => "",
        }
    }

    pub fn color(self) -> Color {
        match self {
            Field::Username => Color::Cyan,
            Field::Name => Color::Yellow,
            Field::Bio => Color::Green,
            Field::Location => Color::Red,
            Field::PublicRepos => Color::Magenta,
            Field::Followers => Color::Blue,
            Field::Following => Color::Cyan,
            Field::Created => Color::Yellow,
            Field::ProfileUrl => Color::Green,
            Field::RepoHeader => Color::Magenta,
            Field::RepoEntry => Color::Yellow,
        }
    }

    pub fn style(self) -> Style {
        Style::new()
            .fg(self.color())
            .bright()
            .force_styling(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbouring_rows_differ_in_color() {
        for pair in Field::PROFILE_ROWS.windows(2) {
            assert_ne!(pair[0].color(), pair[1].color(), "{:?} vs {:?}", pair[0], pair[1]);
        }
        assert_ne!(Field::RepoHeader.color(), Field::RepoEntry.color());
    }

    #[test]
    fn test_style_always_emits_escapes() {
        let styled = Field::Bio.style().apply_to("Bio:").to_string();
        assert!(styled.starts_with('\x1b'));
        assert_eq!(console::strip_ansi_codes(&styled), "Bio:");
    }
}
