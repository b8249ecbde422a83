//! Core library for bigram-stats.
//!
//! Computes adjacent-word-pair (bigram) frequencies from literal text or a
//! text file. The pipeline is:
//!
//! input resolution → [`normalize::clean`] → token cap → pair generation →
//! [`FrequencyMap`].
//!
//! # Modules
//!
//! - [`analyzer`] - End-to-end analysis and the reusable [`BigramAnalyzer`]
//! - [`bigrams`] - Pair generation under a word limit
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//! - [`frequency`] - Ordered bigram counts
//! - [`input`] - Path-versus-text resolution
//! - [`normalize`] - Text cleaning and tokenization
//!
//! # Quick Start
//!
//! ```
//! use bigram_stats_core::analyze;
//!
//! let counts = analyze("one two three one two", 50).unwrap();
//! assert_eq!(counts.get("one two"), Some(2));
//! ```
#![deny(unsafe_code)]

pub mod analyzer;
pub mod bigrams;
pub mod config;
pub mod error;
pub mod frequency;
pub mod input;
pub mod normalize;

pub use analyzer::{BigramAnalyzer, analyze};
pub use bigrams::{BigramReport, DEFAULT_WORD_LIMIT, count_bigrams};
pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use error::{AnalysisError, AnalysisResult, ConfigError, ConfigResult};
pub use frequency::{BigramCount, FrequencyMap};
pub use input::{DEFAULT_MAX_INPUT_BYTES, InputPolicy, InputSource, Resolver};
