//! Compiled regex patterns shared across the crate.
//!
//! All patterns are compiled once at first use using `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// Matches runs of whitespace inside a keyword phrase.
///
/// Used to derive the URL spellings of a phrase (`cookie policy` ->
/// `cookie-policy` / `cookie_policy`).
pub static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_RUN regex"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_run_collapses_mixed_whitespace() {
        let result = WHITESPACE_RUN.replace_all("terms \t of\n use", "-");
        assert_eq!(result, "terms-of-use");
    }
}
