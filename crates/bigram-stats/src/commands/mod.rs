//! Command implementations.

use bigram_stats_core::{Config, InputPolicy, Resolver};

pub mod analyze;
pub mod clean;
pub mod info;
#[cfg(feature = "mcp")]
pub mod serve;

/// Build the input resolver for a command, letting a flag override the
/// configured policy.
pub fn input_resolver(config: &Config, policy: Option<InputPolicy>) -> Resolver {
    config
        .resolver()
        .with_policy(policy.unwrap_or(config.input_policy))
}
