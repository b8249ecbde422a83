//! Text normalization.
//!
//! Turns raw text into a canonical, lowercase stream of word tokens:
//!
//! 1. Lowercase everything.
//! 2. Replace a hyphen sitting between two word characters with a space
//!    (`year-old` becomes `year old`).
//! 3. Delete every character that is neither a word character nor whitespace.
//!
//! "Word character" follows the Unicode `\w` class: letters in any script,
//! combining marks, decimal digits, and connector punctuation such as `_`.
//! Whitespace runs survive cleaning untouched; [`tokenize`] collapses them.

use regex::Regex;
use std::sync::LazyLock;

/// A hyphen with a word character on both sides.
///
/// `\b` is zero-width, so consecutive joins (`a-b-c`) all match.
static INTRA_WORD_HYPHEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b-\b").expect("valid regex"));

/// Anything that is not a word character or whitespace.
static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("valid regex"));

/// Clean raw text into lowercase words separated by the original whitespace.
///
/// Never fails: empty or all-punctuation input returns a (possibly empty)
/// string.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn clean(text: &str) -> String {
    let lowered = text.to_lowercase();
    let joined = INTRA_WORD_HYPHEN.replace_all(&lowered, " ");
    NON_WORD.replace_all(&joined, "").into_owned()
}

/// Split cleaned text into tokens on any run of whitespace.
///
/// Empty tokens never appear, so leading, trailing, and repeated
/// separators (spaces, tabs, newlines) are all equivalent.
pub fn tokenize(cleaned: &str) -> Vec<&str> {
    cleaned.split_whitespace().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_punctuation() {
        assert_eq!(clean("Hello, World!"), "hello world");
        assert_eq!(clean("No@Special#Chars$"), "nospecialchars");
    }

    #[test]
    fn keeps_digits() {
        assert_eq!(clean("123 Testing!"), "123 testing");
    }

    #[test]
    fn lowercases() {
        assert_eq!(clean("ABC Def"), "abc def");
    }

    #[test]
    fn preserves_newlines() {
        assert_eq!(clean("one\ntwo"), "one\ntwo");
        assert_eq!(clean("one \t two"), "one \t two");
    }

    #[test]
    fn intra_word_hyphen_becomes_space() {
        assert_eq!(clean("year-old"), "year old");
        assert_eq!(clean("Well-Known-Fact"), "well known fact");
    }

    #[test]
    fn dangling_hyphens_are_deleted() {
        assert_eq!(clean("-old"), "old");
        assert_eq!(clean("old-"), "old");
        assert_eq!(clean("a - b"), "a  b");
        assert_eq!(clean("a--b"), "ab");
    }

    #[test]
    fn keeps_accented_and_non_latin_letters() {
        assert_eq!(clean("Café au lait"), "café au lait");
        assert_eq!(clean("Привет, мир!"), "привет мир");
        assert_eq!(clean("東京-大阪"), "東京 大阪");
    }

    #[test]
    fn keeps_underscores() {
        assert_eq!(clean("snake_case ok?"), "snake_case ok");
    }

    #[test]
    fn empty_and_blank_input() {
        assert_eq!(clean(""), "");
        assert_eq!(clean("   "), "   ");
        assert_eq!(clean("!!! ???"), " ");
    }

    #[test]
    fn idempotent_on_hyphen_free_ascii() {
        for input in ["Hello, World!", "one\ntwo three", "a a a b b a", "!!! ???", "x_1 #2"] {
            let once = clean(input);
            assert_eq!(clean(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn tokenize_collapses_whitespace() {
        assert_eq!(tokenize("one\n two"), vec!["one", "two"]);
        assert_eq!(tokenize("  one \ttwo  "), vec!["one", "two"]);
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \n\t ").is_empty());
    }
}
