use async_trait::async_trait;
use serde_json::Value;

use crate::fetcher::{FetchError, StatusSource};
use crate::protocol::ToolResult;
use crate::registry::Tool;

pub const TOOL_NAME: &str = "get_status";

pub const DESCRIPTION: &str =
    "Get olografix HQ status.\n\nReturns a string with the status of the Olografix HQ.";

pub const OPEN: &str = "open";
pub const CLOSED: &str = "closed";
pub const UNAVAILABLE: &str = "Unable to fetch status.";

/// Map a fetch outcome to the text reported to the host.
///
/// Only the exact body `true` means open. Any other body, empty included,
/// means closed.
pub fn status_text(result: &Result<String, FetchError>) -> &'static str {
    match result {
        Err(FetchError::Unavailable) => UNAVAILABLE,
        Ok(body) if body == "true" => OPEN,
        Ok(_) => CLOSED,
    }
}

/// The `get_status` tool.
pub struct GetStatusTool {
    source: Box<dyn StatusSource>,
}

impl GetStatusTool {
    pub fn new(source: Box<dyn StatusSource>) -> Self {
        Self { source }
    }
}

#[async_trait]
impl Tool for GetStatusTool {
    fn name(&self) -> &str {
        TOOL_NAME
    }

    fn description(&self) -> &str {
        DESCRIPTION
    }

    fn input_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {}
        })
    }

    /// Fetch once and map the result. Never fails.
    async fn call(&self, _arguments: Value) -> ToolResult {
        let result = self.source.fetch_status().await;
        ToolResult::text(status_text(&result))
    }
}
