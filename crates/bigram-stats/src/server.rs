//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes bigram counting to MCP clients over stdio. Tools wrap the same
//! core functions the CLI commands use.
//!
//! Tool inputs are always treated as literal text. Unlike the CLI, the
//! server never opens a path handed to it by a client.

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};

use bigram_stats_core::input::text_from_value;
use bigram_stats_core::{DEFAULT_WORD_LIMIT, count_bigrams, normalize};

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the `count_bigrams` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CountBigramsParams {
    /// The text to analyze. Must be a JSON string.
    pub input: serde_json::Value,
    /// Maximum number of words used for bigram generation.
    pub word_limit: Option<usize>,
}

/// Parameters for the `clean_text` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CleanTextParams {
    /// The text to normalize.
    pub text: String,
}

/// MCP server exposing bigram statistics.
#[derive(Clone)]
pub struct BigramServer {
    word_limit: usize,
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
}

impl Default for BigramServer {
    fn default() -> Self {
        Self::new(DEFAULT_WORD_LIMIT)
    }
}

#[tool_router]
impl BigramServer {
    /// Create a server whose `count_bigrams` tool defaults to `word_limit`.
    pub fn new(word_limit: usize) -> Self {
        Self {
            word_limit,
            tool_router: Self::tool_router(),
        }
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
            "word_limit": self.word_limit,
        });

        let text = if params.format == "json" {
            serde_json::to_string_pretty(&info)
                .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?
        } else {
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        tracing::info!(tool = "get_info", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Count adjacent word pairs in text.
    #[tool(
        description = "Count bigrams (adjacent word pairs) in text. Text is lowercased and stripped of punctuation first. Returns the bigram list and per-bigram counts."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn count_bigrams(
        &self,
        Parameters(params): Parameters<CountBigramsParams>,
    ) -> Result<CallToolResult, McpError> {
        let word_limit = params.word_limit.unwrap_or(self.word_limit);
        tracing::debug!(tool = "count_bigrams", word_limit, "executing MCP tool");

        let text = text_from_value(&params.input)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
        let report = count_bigrams(text, word_limit);

        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;

        tracing::info!(
            tool = "count_bigrams",
            distinct = report.frequencies.len(),
            limit_reached = report.limit_reached,
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Show the normalized form of text.
    #[tool(
        description = "Normalize text the way count_bigrams does: lowercase, split hyphenated words, drop punctuation."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn clean_text(
        &self,
        Parameters(params): Parameters<CleanTextParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "clean_text", "executing MCP tool");

        let cleaned = normalize::clean(&params.text);
        let json = serde_json::json!({
            "cleaned": cleaned,
            "tokens": normalize::tokenize(&cleaned),
        });
        let text = serde_json::to_string_pretty(&json)
            .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;

        tracing::info!(tool = "clean_text", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}

#[tool_handler]
impl ServerHandler for BigramServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Use count_bigrams to get word-pair frequencies for a passage of text.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}
