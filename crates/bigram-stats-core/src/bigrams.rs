//! Bigram generation and counting.
//!
//! A bigram is two adjacent tokens joined by a single space. Tokens come
//! from [`normalize::clean`] and are capped at a word limit before pairs are
//! formed, so at most `word_limit - 1` bigrams are produced per call.

use schemars::JsonSchema;
use serde::Serialize;

use crate::frequency::FrequencyMap;
use crate::normalize;

/// Default maximum number of tokens considered per analysis.
pub const DEFAULT_WORD_LIMIT: usize = 50;

/// Result of counting bigrams in one text.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct BigramReport {
    /// Number of tokens in the cleaned text, before the word limit applied.
    pub token_count: usize,
    /// Maximum number of tokens used for pair generation.
    pub word_limit: usize,
    /// Whether the token count reached the word limit.
    pub limit_reached: bool,
    /// Every bigram in token order, duplicates included.
    pub bigrams: Vec<String>,
    /// Occurrence count per distinct bigram, in first-seen order.
    #[schemars(with = "std::collections::BTreeMap<String, usize>")]
    pub frequencies: FrequencyMap,
}

impl BigramReport {
    fn empty(token_count: usize, word_limit: usize) -> Self {
        Self {
            token_count,
            word_limit,
            limit_reached: false,
            bigrams: Vec::new(),
            frequencies: FrequencyMap::new(),
        }
    }
}

/// Join each adjacent pair of tokens with a single space.
pub fn generate_bigrams(tokens: &[&str]) -> Vec<String> {
    tokens.windows(2).map(|pair| pair.join(" ")).collect()
}

/// Clean `text`, cap it at `word_limit` tokens, and count its bigrams.
///
/// Fewer than two tokens yield an empty report. Reaching the limit is not
/// an error: the excess tokens are dropped and a warning is logged.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn count_bigrams(text: &str, word_limit: usize) -> BigramReport {
    let cleaned = normalize::clean(text);
    let tokens = normalize::tokenize(&cleaned);
    let token_count = tokens.len();

    if token_count < 2 {
        tracing::debug!(token_count, "not enough tokens for a bigram");
        return BigramReport::empty(token_count, word_limit);
    }

    let limit_reached = token_count >= word_limit;
    if limit_reached {
        tracing::warn!(
            token_count,
            word_limit,
            "only the first {word_limit} words are used for bigram generation"
        );
    }

    let kept = &tokens[..token_count.min(word_limit)];
    let bigrams = generate_bigrams(kept);
    let frequencies = FrequencyMap::from_bigrams(&bigrams);

    tracing::debug!(
        bigrams = bigrams.len(),
        distinct = frequencies.len(),
        "bigrams counted"
    );

    BigramReport {
        token_count,
        word_limit,
        limit_reached,
        bigrams,
        frequencies,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(s: &[&str]) -> Vec<String> {
        s.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn bigrams_in_token_order() {
        let report = count_bigrams("The quick brown fox and the quick blue hare", 20);
        assert_eq!(
            report.bigrams,
            strings(&[
                "the quick",
                "quick brown",
                "brown fox",
                "fox and",
                "and the",
                "the quick",
                "quick blue",
                "blue hare",
            ])
        );
        assert_eq!(report.frequencies.get("the quick"), Some(2));
    }

    #[test]
    fn numbers_are_tokens() {
        let report = count_bigrams("The address is 12345 nowhere street omaha nebraska", 20);
        assert_eq!(
            report.bigrams,
            strings(&[
                "the address",
                "address is",
                "is 12345",
                "12345 nowhere",
                "nowhere street",
                "street omaha",
                "omaha nebraska",
            ])
        );
        assert_eq!(report.frequencies.get("is 12345"), Some(1));
    }

    #[test]
    fn case_folding_merges_counts() {
        let report = count_bigrams("The The the", 50);
        assert_eq!(
            report.frequencies,
            FrequencyMap::from_bigrams(["the the", "the the"])
        );
        assert_eq!(report.frequencies.len(), 1);
    }

    #[test]
    fn hyphenated_word_splits() {
        let report = count_bigrams("year-old", 50);
        assert_eq!(report.bigrams, strings(&["year old"]));

        let report = count_bigrams("-old", 50);
        assert!(report.bigrams.is_empty());
    }

    #[test]
    fn fewer_than_two_tokens_is_empty() {
        for input in [
            "",
            " ",
            "                                        ",
            "Word",
            "                                        nebraska",
            "!!! ???",
        ] {
            let report = count_bigrams(input, 20);
            assert!(report.bigrams.is_empty(), "input {input:?}");
            assert!(report.frequencies.is_empty(), "input {input:?}");
            assert!(!report.limit_reached);
        }
    }

    #[test]
    fn any_whitespace_separates_tokens() {
        for input in ["one\ntwo", "one\n two", "one \ntwo", "one\ttwo"] {
            assert_eq!(count_bigrams(input, 20).bigrams, strings(&["one two"]));
        }
    }

    #[test]
    fn truncates_to_word_limit() {
        let text: Vec<String> = (0..60).map(|i| format!("w{i}")).collect();
        let report = count_bigrams(&text.join(" "), 50);

        assert!(report.limit_reached);
        assert_eq!(report.token_count, 60);
        assert_eq!(report.bigrams.len(), 49);
        assert_eq!(report.bigrams.last().map(String::as_str), Some("w48 w49"));
        assert_eq!(report.frequencies.get("w49 w50"), None);
    }

    #[test]
    fn limit_reached_at_exact_length() {
        let report = count_bigrams("a b c d", 4);
        assert!(report.limit_reached);
        assert_eq!(report.bigrams.len(), 3);

        let report = count_bigrams("a b c", 4);
        assert!(!report.limit_reached);
    }

    #[test]
    fn bigram_count_matches_tokens_and_totals() {
        for (input, limit) in [
            ("a a a b b a", 20),
            ("one two three one two", 3),
            ("Café au lait, s'il vous plaît", 50),
        ] {
            let report = count_bigrams(input, limit);
            let kept = report.token_count.min(limit);
            assert_eq!(report.bigrams.len(), kept.saturating_sub(1));
            assert_eq!(report.frequencies.total(), report.bigrams.len());
        }
    }

    #[test]
    fn singles_counted() {
        let report = count_bigrams("a a a b b a", 20);
        let expected = FrequencyMap::from_bigrams(["a a", "a a", "a b", "b b", "b a"]);
        assert_eq!(report.frequencies, expected);
    }

    #[test]
    fn accented_letters_survive() {
        let report = count_bigrams("Café au lait", 50);
        assert_eq!(report.frequencies.get("café au"), Some(1));
        assert_eq!(report.frequencies.get("au lait"), Some(1));
    }

    #[test]
    fn report_serializes_frequencies_in_order() {
        let report = count_bigrams("one two three one two", 50);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["frequencies"]["one two"], 2);
        assert_eq!(json["bigrams"].as_array().unwrap().len(), 4);
        assert_eq!(json["limit_reached"], false);
    }
}
