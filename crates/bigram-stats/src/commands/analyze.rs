//! Analyze command implementation

use anyhow::Context;
use clap::Args;
use clap::builder::BoolishValueParser;
use owo_colors::{OwoColorize, Stream};
use tracing::{debug, instrument};

use bigram_stats_core::{BigramAnalyzer, Config, InputPolicy};

use super::input_resolver;
use crate::histogram;

/// Passage analyzed when no input is given.
pub const SAMPLE_TEXT: &str = "The quick brown fox and the quick blue hare. \
I would like your advice about Rule 143 concerning inadmissibility. \
My question relates to something that will come up on Thursday and which I will then raise again. \
The Cunha report on multiannual guidance programmes comes before Parliament on Thursday and \
contains a proposal in paragraph 6 that a form of quota penalties should be introduced for \
countries which fail to meet their fleet reduction targets annually. \
It says that this should be done despite the principle of relative stability.";

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Text to analyze, or a path to a text file (defaults to a sample passage).
    pub input: Option<String>,

    /// Maximum number of words used for bigram generation.
    #[arg(long, value_name = "N")]
    pub word_size: Option<usize>,

    /// Draw a histogram of the counts (true/false, 1/0, yes/no).
    #[arg(long, value_name = "BOOL", value_parser = BoolishValueParser::new())]
    pub histogram: Option<bool>,

    /// Also print every bigram in text order.
    #[arg(long)]
    pub debug: bool,

    /// How INPUT is told apart from a file path.
    #[arg(long, value_enum)]
    pub policy: Option<InputPolicy>,
}

/// Count bigrams in the given input and print them.
#[instrument(name = "cmd_analyze", skip_all, fields(word_size = ?args.word_size))]
pub fn cmd_analyze(args: AnalyzeArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    debug!(
        histogram = ?args.histogram,
        policy = ?args.policy,
        debug = args.debug,
        "executing analyze command"
    );

    let input = args.input.as_deref().unwrap_or(SAMPLE_TEXT);
    let word_limit = args.word_size.unwrap_or(config.word_limit);
    let show_histogram = args.histogram.unwrap_or(config.histogram);

    let mut analyzer = BigramAnalyzer::new()
        .with_word_limit(word_limit)
        .with_resolver(input_resolver(config, args.policy));
    let report = analyzer
        .analyze_report(input)
        .context("failed to analyze input")?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if args.debug {
        println!(
            "{} {:?}",
            "Bigrams:".if_supports_color(Stream::Stdout, |t| t.cyan()),
            report.bigrams
        );
    }

    if report.frequencies.is_empty() {
        println!(
            "{}",
            "no bigrams (fewer than two words)".if_supports_color(Stream::Stdout, |t| t.dimmed())
        );
        return Ok(());
    }

    println!("{analyzer}");

    if show_histogram {
        let rows = histogram::rows(&report.frequencies.ranked(), config.histogram_width);
        println!();
        println!(
            "{}",
            histogram::TITLE.if_supports_color(Stream::Stdout, |t| t.bold())
        );
        for row in rows {
            println!(
                "{} {} {}",
                row.label,
                row.bar.if_supports_color(Stream::Stdout, |t| t.green()),
                row.count
            );
        }
    }

    Ok(())
}
