//! Horizontal bar chart of bigram counts for the terminal.
//!
//! Entries are drawn in the order given, which for [`FrequencyMap::ranked`]
//! puts the most frequent bigram on top.
//!
//! [`FrequencyMap::ranked`]: bigram_stats_core::FrequencyMap::ranked

use bigram_stats_core::BigramCount;

/// Title line printed above the bars.
pub const TITLE: &str = "Bigram Token Frequency Histogram";

const BAR: char = '█';

/// Widest bar drawn, whatever width is configured.
pub const MAX_BAR_WIDTH: usize = 500;

/// One rendered row: padded label, bar, and count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Bigram, right-padded to the widest label.
    pub label: String,
    /// Bar proportional to the count.
    pub bar: String,
    /// The count itself.
    pub count: usize,
}

/// Lay out one row per entry, scaling bars so the largest count spans
/// `width` columns (at most [`MAX_BAR_WIDTH`]). Every non-zero count gets
/// at least one column.
pub fn rows(entries: &[BigramCount], width: usize) -> Vec<Row> {
    let Some(max) = entries.iter().map(|e| e.count).max() else {
        return Vec::new();
    };
    let label_width = entries
        .iter()
        .map(|e| e.bigram.chars().count())
        .max()
        .unwrap_or(0);
    let width = width.clamp(1, MAX_BAR_WIDTH);

    entries
        .iter()
        .map(|entry| {
            let scaled = (entry.count as u128 * width as u128).div_ceil(max.max(1) as u128);
            let len = usize::try_from(scaled).unwrap_or(width);
            Row {
                label: format!("{:<label_width$}", entry.bigram),
                bar: BAR.to_string().repeat(len),
                count: entry.count,
            }
        })
        .collect()
}
