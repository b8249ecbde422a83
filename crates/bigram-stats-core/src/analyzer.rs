//! End-to-end bigram analysis: resolve input, clean, count.

use std::fmt;

use crate::bigrams::{self, BigramReport, DEFAULT_WORD_LIMIT};
use crate::config::Config;
use crate::error::AnalysisResult;
use crate::frequency::FrequencyMap;
use crate::input::Resolver;

/// Analyze `input` (text or a path to a text file) with default resolution.
///
/// Convenience wrapper around [`BigramAnalyzer`] for one-off calls.
pub fn analyze(input: &str, word_limit: usize) -> AnalysisResult<FrequencyMap> {
    let mut analyzer = BigramAnalyzer::new().with_word_limit(word_limit);
    analyzer.analyze(input)?;
    Ok(analyzer.into_frequencies())
}

/// Reusable analyzer that keeps the frequencies of its most recent call.
///
/// Every call replaces the previous result; counts never accumulate across
/// inputs.
#[derive(Debug, Clone)]
pub struct BigramAnalyzer {
    word_limit: usize,
    resolver: Resolver,
    frequencies: FrequencyMap,
}

impl Default for BigramAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl BigramAnalyzer {
    /// Analyzer with the default word limit and resolver.
    pub fn new() -> Self {
        Self {
            word_limit: DEFAULT_WORD_LIMIT,
            resolver: Resolver::new(),
            frequencies: FrequencyMap::new(),
        }
    }

    /// Analyzer configured from loaded settings.
    pub fn from_config(config: &Config) -> Self {
        Self::new()
            .with_word_limit(config.word_limit)
            .with_resolver(config.resolver())
    }

    /// Set the maximum number of tokens considered.
    pub const fn with_word_limit(mut self, word_limit: usize) -> Self {
        self.word_limit = word_limit;
        self
    }

    /// Set how inputs are resolved to text.
    pub const fn with_resolver(mut self, resolver: Resolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// The configured word limit.
    pub const fn word_limit(&self) -> usize {
        self.word_limit
    }

    /// Resolve `input`, count its bigrams, and return the full report.
    ///
    /// The stored frequencies are cleared before anything else happens, so a
    /// failed call leaves them empty rather than stale.
    #[tracing::instrument(skip_all, fields(word_limit = self.word_limit))]
    pub fn analyze_report(&mut self, input: &str) -> AnalysisResult<BigramReport> {
        self.frequencies.clear();
        let text = self.resolver.resolve(input)?;
        let report = bigrams::count_bigrams(&text, self.word_limit);
        self.frequencies = report.frequencies.clone();
        Ok(report)
    }

    /// Resolve `input` and count its bigrams.
    pub fn analyze(&mut self, input: &str) -> AnalysisResult<&FrequencyMap> {
        self.analyze_report(input)?;
        Ok(&self.frequencies)
    }

    /// Count bigrams in `text` directly, without path resolution.
    pub fn count(&mut self, text: &str) -> &FrequencyMap {
        self.frequencies = bigrams::count_bigrams(text, self.word_limit).frequencies;
        &self.frequencies
    }

    /// Frequencies from the most recent call.
    pub const fn frequencies(&self) -> &FrequencyMap {
        &self.frequencies
    }

    /// Consume the analyzer, keeping its most recent frequencies.
    pub fn into_frequencies(self) -> FrequencyMap {
        self.frequencies
    }
}

impl fmt::Display for BigramAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.frequencies, f)
    }
}
