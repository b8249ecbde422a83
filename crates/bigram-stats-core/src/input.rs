//! Input resolution: deciding whether a string is a file path or text.
//!
//! A single string can name a file or be the text itself. The [`Resolver`]
//! decides once, up front, under one [`InputPolicy`]:
//!
//! - [`InputPolicy::ExistingFile`]: any string naming an existing regular file
//!   is read; everything else is literal text.
//! - [`InputPolicy::LengthLimited`]: same, but strings longer than the
//!   filename limit are never checked against the filesystem.
//!
//! A candidate path that cannot be opened because it is missing or not
//! permitted falls back to literal text. This is a routing rule, so a typo
//! in an intended path is analyzed as text rather than reported.

use std::borrow::Cow;
use std::io::ErrorKind;

use camino::Utf8Path;
use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, AnalysisResult};

/// Longest string still considered a path under [`InputPolicy::LengthLimited`].
pub const DEFAULT_FILENAME_LIMIT: usize = 255;

/// Default maximum input file size (5 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;

/// How a string is disambiguated between path and literal text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum InputPolicy {
    /// Read the string as a path whenever it names an existing file.
    #[default]
    ExistingFile,
    /// Only consider strings up to the filename limit as paths.
    ///
    /// The limit counts UTF-8 bytes, the unit the OS uses for name lengths.
    LengthLimited,
}

impl InputPolicy {
    /// Returns the policy name as used in config files.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ExistingFile => "existing-file",
            Self::LengthLimited => "length-limited",
        }
    }
}

impl std::fmt::Display for InputPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the working text comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource<'a> {
    /// The input string is the text.
    Literal(&'a str),
    /// The input string names a file whose contents are the text.
    File(&'a Utf8Path),
}

/// Resolves raw input strings into working text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolver {
    policy: InputPolicy,
    filename_limit: usize,
    max_input_bytes: Option<usize>,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Resolver {
    /// Resolver using [`InputPolicy::ExistingFile`] with no size limit.
    ///
    /// The CLI applies [`DEFAULT_MAX_INPUT_BYTES`] through
    /// [`Config::resolver`](crate::Config::resolver).
    pub const fn new() -> Self {
        Self {
            policy: InputPolicy::ExistingFile,
            filename_limit: DEFAULT_FILENAME_LIMIT,
            max_input_bytes: None,
        }
    }

    /// Set the disambiguation policy.
    pub const fn with_policy(mut self, policy: InputPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the filename limit used by [`InputPolicy::LengthLimited`].
    pub const fn with_filename_limit(mut self, limit: usize) -> Self {
        self.filename_limit = limit;
        self
    }

    /// Set the maximum file size in bytes, or `None` for no limit.
    pub const fn with_max_input_bytes(mut self, max: Option<usize>) -> Self {
        self.max_input_bytes = max;
        self
    }

    /// The active policy.
    pub const fn policy(&self) -> InputPolicy {
        self.policy
    }

    /// Decide whether `input` is literal text or a file path.
    pub fn classify<'a>(&self, input: &'a str) -> InputSource<'a> {
        if input.is_empty() {
            return InputSource::Literal(input);
        }
        if self.policy == InputPolicy::LengthLimited && input.len() > self.filename_limit {
            return InputSource::Literal(input);
        }
        let path = Utf8Path::new(input);
        // is_file() is false on any stat error, including over-long names
        if path.is_file() {
            InputSource::File(path)
        } else {
            InputSource::Literal(input)
        }
    }

    /// Produce the working text for `input`.
    ///
    /// Never mutates `input`; literal text is borrowed, file contents are
    /// owned.
    #[tracing::instrument(skip_all, fields(input_len = input.len(), policy = %self.policy))]
    pub fn resolve<'a>(&self, input: &'a str) -> AnalysisResult<Cow<'a, str>> {
        match self.classify(input) {
            InputSource::Literal(text) => {
                tracing::debug!("treating input as literal text");
                Ok(Cow::Borrowed(text))
            }
            InputSource::File(path) => match self.read_candidate(path)? {
                Some(contents) => {
                    tracing::debug!(path = %path, bytes = contents.len(), "read input file");
                    Ok(Cow::Owned(contents))
                }
                None => {
                    tracing::debug!(path = %path, "file not readable, treating input as text");
                    Ok(Cow::Borrowed(input))
                }
            },
        }
    }

    /// Read a candidate file, returning `None` when it should be treated as text.
    fn read_candidate(&self, path: &Utf8Path) -> AnalysisResult<Option<String>> {
        if let Some(limit) = self.max_input_bytes {
            match std::fs::metadata(path.as_std_path()) {
                Ok(meta) if meta.len() > limit as u64 => {
                    return Err(AnalysisError::InputTooLarge {
                        path: path.to_path_buf(),
                        size: meta.len(),
                        limit,
                    });
                }
                Ok(_) => {}
                Err(e) if falls_back_to_text(&e) => return Ok(None),
                Err(source) => {
                    return Err(AnalysisError::ReadInput {
                        path: path.to_path_buf(),
                        source,
                    });
                }
            }
        }

        match std::fs::read_to_string(path.as_std_path()) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if falls_back_to_text(&e) => Ok(None),
            Err(source) => Err(AnalysisError::ReadInput {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

fn falls_back_to_text(err: &std::io::Error) -> bool {
    matches!(err.kind(), ErrorKind::NotFound | ErrorKind::PermissionDenied)
}

/// Extract text from an untyped JSON value.
///
/// Fails with [`AnalysisError::InvalidInputKind`] for anything but a string.
pub fn text_from_value(value: &serde_json::Value) -> AnalysisResult<&str> {
    value.as_str().ok_or(AnalysisError::InvalidInputKind {
        found: json_kind(value),
    })
}

const fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
