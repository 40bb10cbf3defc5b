// src/terminal.rs
// =============================================================================
// Makes sure the terminal understands ANSI color escape sequences.
//
// Unix terminals always do. Older Windows consoles only do once "virtual
// terminal processing" is switched on for the process, which is what
// colored::control::set_virtual_terminal does. If that fails (very old
// Windows, output redirected...) we carry on: the worst case is some raw
// escape codes in the output.
// =============================================================================

#[cfg(windows)]
pub fn enable_ansi_support() {
    if colored::control::set_virtual_terminal(true).is_err() {
        log::debug!("Could not enable virtual terminal processing");
    }
}

#[cfg(not(windows))]
pub fn enable_ansi_support() {}
