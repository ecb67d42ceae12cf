//! Provides utilities for dealing with terminals.

use std::io;

pub mod style;

/// Decides whether ANSI escape codes should be written to `stream`.
///
/// An explicit `choice` wins. Otherwise this defers to
/// [`supports_ansi_escapes`].
pub fn use_ansi_escapes<T: io::IsTerminal>(choice: Option<bool>, stream: &T) -> bool {
    choice.unwrap_or_else(|| supports_ansi_escapes(stream))
}

/// Performs automatic detection of whether ANSI escape codes are supported.
///
/// Honors `NO_COLOR`, `CLICOLOR` and `CLICOLOR_FORCE`.
pub fn supports_ansi_escapes<T: io::IsTerminal>(stream: &T) -> bool {
    use anstyle_query as a;

    if a::no_color() {
        return false;
    }

    if a::clicolor_force() {
        return true;
    }

    match a::clicolor() {
        Some(false) => false,
        Some(true) => stream.is_terminal(),
        None => stream.is_terminal() && (a::term_supports_color() || a::is_ci()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_choice_wins() {
        let stream = io::stderr();
        assert!(use_ansi_escapes(Some(true), &stream));
        assert!(!use_ansi_escapes(Some(false), &stream));
    }
}
