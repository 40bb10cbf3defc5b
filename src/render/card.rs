// src/render/card.rs
// =============================================================================
// Puts the avatar and the profile text next to each other and prints them.
//
//   ████████████ | Username: octocat
//   ████████████ | Name: The Octocat
//                | Top Repositories:      <- avatar ran out, padded
//
// Neither column is ever cut off: the taller one decides how many lines the
// card has, and the shorter one is padded.
// =============================================================================

use std::io::{self, Write};

use super::wrap::sanitize;

/// Placed between the avatar and the text
pub const SEPARATOR: &str = " | ";

/// Width of the "=====" lines around the banner
pub const BANNER_WIDTH: usize = 80;

// Merges the two columns line by line
//
// Parameters:
//   avatar: avatar lines (may contain escape sequences)
//   info: profile lines
//   avatar_width: visible width of one avatar line, used to pad missing ones
pub fn merge_columns(avatar: &[String], info: &[String], avatar_width: usize) -> Vec<String> {
    let blank = " ".repeat(avatar_width);
    let height = avatar.len().max(info.len());

    (0..height)
        .map(|i| {
            let left = avatar.get(i).map(String::as_str).unwrap_or(blank.as_str());
            let right = info.get(i).map(String::as_str).unwrap_or("");
            format!("{}{}{}", left, SEPARATOR, right)
        })
        .collect()
}

// Writes the banner, the merged rows and a trailing blank line
pub fn print_card<W: Write>(out: &mut W, login: &str, rows: &[String]) -> io::Result<()> {
    let rule = "=".repeat(BANNER_WIDTH);
    let title = console::style(format!("GitHub Profile Card - @{}", sanitize(login)))
        .cyan()
        .bright()
        .force_styling(true);

    writeln!(out)?;
    writeln!(out, "{}", rule)?;
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", rule)?;
    writeln!(out)?;

    for row in rows {
        writeln!(out, "{}", row)?;
    }

    writeln!(out)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(prefix: &str, n: usize) -> Vec<String> {
        (0..n).map(|i| format!("{}{}", prefix, i)).collect()
    }

    #[test]
    fn test_height_is_the_taller_column() {
        assert_eq!(merge_columns(&lines("a", 18), &lines("i", 11), 36).len(), 18);
        assert_eq!(merge_columns(&lines("a", 18), &lines("i", 25), 36).len(), 25);
        assert_eq!(merge_columns(&[], &lines("i", 4), 36).len(), 4);
        assert!(merge_columns(&[], &[], 36).is_empty());
    }

    #[test]
    fn test_separator_appears_once_per_row() {
        let rows = merge_columns(&lines("a", 3), &lines("i", 6), 2);
        for row in &rows {
            assert_eq!(row.matches(SEPARATOR).count(), 1, "{:?}", row);
        }
        assert_eq!(rows[0], "a0 | i0");
        assert_eq!(rows[5], "   | i5");
    }

    #[test]
    fn test_missing_info_is_empty() {
        let rows = merge_columns(&lines("a", 2), &lines("i", 1), 2);
        assert_eq!(rows, vec!["a0 | i0", "a1 | "]);
    }

    #[test]
    fn test_padding_uses_visible_width() {
        let avatar = vec!["\x1b[38;2;1;2;3m██\x1b[0m".repeat(18)];
        let rows = merge_columns(&avatar, &lines("i", 2), 36);

        assert_eq!(rows[1], format!("{} | i1", " ".repeat(36)));
        // The padded row lines up with the real one
        assert_eq!(
            console::measure_text_width(&rows[0]),
            console::measure_text_width(&rows[1])
        );
    }

    #[test]
    fn test_print_card_layout() {
        let rows = merge_columns(&lines("a", 1), &lines("i", 2), 2);
        let mut out = Vec::new();

        print_card(&mut out, "octocat", &rows).unwrap();

        let text = String::from_utf8(out).unwrap();
        let text = console::strip_ansi_codes(&text);
        let expected = format!(
            "\n{rule}\nGitHub Profile Card - @octocat\n{rule}\n\na0 | i0\n   | i1\n\n",
            rule = "=".repeat(80)
        );
        assert_eq!(text, expected);
    }
}
