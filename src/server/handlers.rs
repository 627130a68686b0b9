//! MCP tool handlers for the PLU search server.
//!
//! Typed and spoken queries arrive as separate tools and are routed into the
//! same lookup service. Results are returned as pretty-printed JSON.

use crate::error::LookupError;
use crate::services::{LookupResponse, LookupService, QueryInput};
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::Deserialize;
use std::borrow::Cow;
use std::sync::Arc;

/// Message attached to responses that matched nothing.
pub const NO_MATCH_MESSAGE: &str = "No match found";

/// The MCP server exposing produce lookup tools.
#[derive(Clone)]
pub struct PluSearchServer {
    lookup_service: Arc<dyn LookupService>,
    tool_router: ToolRouter<Self>,
}

#[tool_handler]
impl ServerHandler for PluSearchServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "plu-search".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("Produce PLU lookup - finds price look-up codes from typed or spoken produce names, tolerating typos.".into()),
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
struct LookupProduceParams {
    /// Free-text produce name, e.g. "red onion"
    query: String,
    #[serde(default)]
    max_results: Option<usize>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct LookupSpokenProduceParams {
    /// Speech recognizer alternatives, most likely first
    transcriptions: Vec<String>,
    #[serde(default)]
    max_results: Option<usize>,
}

// Helper function to convert errors to MCP errors
fn to_mcp_error(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INTERNAL_ERROR,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

fn lookup_error_to_mcp(e: LookupError) -> McpError {
    McpError {
        code: ErrorCode::INVALID_PARAMS,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

/// Render a lookup response as the JSON returned to MCP clients.
pub fn lookup_response_json(response: &LookupResponse) -> serde_json::Value {
    let mut json = serde_json::json!({
        "query": response.query,
        "result_count": response.results.len(),
        "results": response.results.iter().map(|item| {
            serde_json::json!({
                "code": item.code,
                "description": item.description,
                "display": item.display_line(),
            })
        }).collect::<Vec<_>>(),
        "no_match": response.no_match,
    });

    if response.no_match {
        json["message"] = serde_json::Value::from(NO_MATCH_MESSAGE);
    }
    if let Some(ref load_error) = response.load_error {
        json["load_error"] = serde_json::Value::from(load_error.as_str());
    }

    json
}

#[tool_router]
impl PluSearchServer {
    /// Create a new PLU search server.
    pub fn new(lookup_service: Arc<dyn LookupService>) -> Self {
        Self {
            lookup_service,
            tool_router: Self::tool_router(),
        }
    }

    /// Catalog summary returned by the `catalog_info` tool.
    ///
    /// `load_error` is null unless the startup load failed.
    pub fn catalog_info_json(&self) -> serde_json::Value {
        serde_json::json!({
            "item_count": self.lookup_service.catalog_size(),
            "default_max_results": self.lookup_service.default_limit(),
            "load_error": self.lookup_service.load_error(),
        })
    }

    async fn run_lookup(
        &self,
        input: QueryInput,
        max_results: Option<usize>,
    ) -> Result<CallToolResult, McpError> {
        let response = self
            .lookup_service
            .lookup(input, max_results)
            .await
            .map_err(lookup_error_to_mcp)?;

        let text = match response {
            Some(response) => serde_json::to_string_pretty(&lookup_response_json(&response))
                .map_err(to_mcp_error)?,
            None => "No transcription received; nothing was searched.".to_string(),
        };

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Look up produce from typed text.
    #[tool(
        description = "Find produce PLU codes from a typed name. Every word must match a word of the item's description within one edit (words up to 4 letters) or two edits (longer words). Returns the best matches first."
    )]
    async fn lookup_produce(
        &self,
        params: Parameters<LookupProduceParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        tracing::debug!(query = %params.query, max_results = ?params.max_results, "lookup_produce called");

        self.run_lookup(QueryInput::Text(params.query), params.max_results)
            .await
    }

    /// Look up produce from speech recognizer output.
    #[tool(
        description = "Find produce PLU codes from speech-to-text output. Pass the recognizer's alternatives, most likely first; only the first is searched."
    )]
    async fn lookup_spoken_produce(
        &self,
        params: Parameters<LookupSpokenProduceParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        tracing::debug!(
            alternatives = params.transcriptions.len(),
            max_results = ?params.max_results,
            "lookup_spoken_produce called"
        );

        self.run_lookup(
            QueryInput::Spoken(params.transcriptions),
            params.max_results,
        )
        .await
    }

    /// Describe the loaded catalog.
    #[tool(description = "Report how many produce items are loaded, the default number of results per lookup, and any error from loading the catalog")]
    async fn catalog_info(&self) -> Result<CallToolResult, McpError> {
        Ok(CallToolResult::success(vec![Content::text(
            serde_json::to_string_pretty(&self.catalog_info_json()).map_err(to_mcp_error)?,
        )]))
    }
}
