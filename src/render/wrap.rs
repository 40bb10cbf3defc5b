// src/render/wrap.rs
// =============================================================================
// Plain-text helpers used before any styling is applied:
// - sanitize: strip control characters that would corrupt the terminal
// - wrap: greedy word wrapping at a fixed width
// - truncate: shorten text with a trailing "..."
//
// All widths here are counted in chars. Styling happens afterwards, one
// output line at a time, so an escape sequence can never be cut in half.
// =============================================================================

// Replaces whitespace control characters (newline, tab...) with a space and
// drops every other control character, including ESC
pub fn sanitize(text: &str) -> String {
    text.chars()
        .filter_map(|c| {
            if c.is_whitespace() {
                Some(' ')
            } else if c.is_control() {
                None
            } else {
                Some(c)
            }
        })
        .collect()
}

// Wraps `text` into lines of at most `width` chars
//
// Runs of whitespace collapse into one space. Words longer than `width`
// are split across lines. Returns an empty Vec for blank input.
//
// Example:
//   wrap("the quick brown fox", 10) -> ["the quick", "brown fox"]
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();

        // Start a new line if the word doesn't fit after a space
        if current_len > 0 && current_len + 1 + word.len() > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }

        // Hard-split words that are wider than a whole line.
        // The check above already flushed `current` in that case.
        while word.len() > width {
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }

        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current_len += word.len();
        current.extend(word);
    }

    if current_len > 0 {
        lines.push(current);
    }

    lines
}

// Keeps text up to `max` chars; longer text is cut to `max - 3` chars plus "..."
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }

    let keep = max.saturating_sub(3);
    let mut short: String = text.chars().take(keep).collect();
    short.push_str("...");
    short
}
