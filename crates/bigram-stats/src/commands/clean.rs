//! Clean command: print the normalized form of the input.

use anyhow::Context;
use clap::Args;
use serde::Serialize;
use tracing::{debug, instrument};

use bigram_stats_core::{Config, InputPolicy, normalize};

use super::input_resolver;

/// Arguments for the `clean` subcommand.
#[derive(Args, Debug)]
pub struct CleanArgs {
    /// Text to normalize, or a path to a text file.
    pub input: String,

    /// How INPUT is told apart from a file path.
    #[arg(long, value_enum)]
    pub policy: Option<InputPolicy>,
}

#[derive(Serialize)]
struct CleanOutput<'a> {
    cleaned: &'a str,
    tokens: Vec<&'a str>,
}

/// Print the normalized form of the input.
#[instrument(name = "cmd_clean", skip_all)]
pub fn cmd_clean(args: CleanArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    debug!(policy = ?args.policy, "executing clean command");

    let text = input_resolver(config, args.policy)
        .resolve(&args.input)
        .context("failed to read input")?;
    let cleaned = normalize::clean(&text);

    if global_json {
        let output = CleanOutput {
            cleaned: &cleaned,
            tokens: normalize::tokenize(&cleaned),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{cleaned}");
    }

    Ok(())
}
