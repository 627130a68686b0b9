//! MCP server for produce lookup.
//!
//! This module exposes the lookup service to MCP clients over stdio.

pub mod handlers;

pub use handlers::{lookup_response_json, PluSearchServer, NO_MATCH_MESSAGE};

use anyhow::Result;
use rmcp::transport::io::stdio;
use rmcp::ServiceExt;

/// Run the PLU search server with stdio transport.
///
/// Communicates via stdin/stdout using the MCP protocol and returns when the
/// client disconnects.
pub async fn run_server(server: PluSearchServer) -> Result<()> {
    let service = server.serve(stdio()).await?;

    service.waiting().await?;

    Ok(())
}
