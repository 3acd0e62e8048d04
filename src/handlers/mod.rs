pub mod get_status;

use crate::config::ServerConfig;
use crate::fetcher::HttpStatusFetcher;
use crate::protocol::{
    InitializeParams, JsonRpcError, JsonRpcRequest, JsonRpcResponse, ToolCallParams,
};
use crate::registry::{RegistryError, ToolRegistry};

/// MCP protocol revision this server speaks.
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// Name reported in `serverInfo`.
pub const SERVER_NAME: &str = "sede";

/// Build the process registry: `get_status` backed by the HTTP fetcher.
pub fn build_registry(config: &ServerConfig) -> Result<ToolRegistry, RegistryError> {
    let fetcher = HttpStatusFetcher::new(config);
    let mut registry = ToolRegistry::new();
    registry.register(Box::new(get_status::GetStatusTool::new(Box::new(fetcher))))?;
    Ok(registry)
}

/// Dispatch a JSON-RPC request to the appropriate handler.
///
/// Returns `None` for notifications (no response required).
pub async fn dispatch(req: &JsonRpcRequest, registry: &ToolRegistry) -> Option<JsonRpcResponse> {
    match req.method.as_str() {
        "initialize" => {
            if let Some(params) = req
                .params
                .clone()
                .and_then(|v| serde_json::from_value::<InitializeParams>(v).ok())
            {
                let client = params.client_info.as_ref();
                tracing::info!(
                    protocol_version = params.protocol_version.as_deref().unwrap_or("unknown"),
                    client = client.and_then(|c| c.name.as_deref()).unwrap_or("unknown"),
                    client_version = client.and_then(|c| c.version.as_deref()).unwrap_or("unknown"),
                    "initialize"
                );
            }

            let result = serde_json::json!({
                "protocolVersion": PROTOCOL_VERSION,
                "capabilities": {
                    "tools": {}
                },
                "serverInfo": {
                    "name": SERVER_NAME,
                    "version": env!("CARGO_PKG_VERSION")
                }
            });
            Some(JsonRpcResponse::success(req.id.clone(), result))
        }

        "notifications/initialized" => None,

        "ping" => Some(JsonRpcResponse::success(req.id.clone(), serde_json::json!({}))),

        "tools/list" => {
            let result = serde_json::json!({ "tools": registry.descriptors() });
            Some(JsonRpcResponse::success(req.id.clone(), result))
        }

        "tools/call" => {
            let params: ToolCallParams = match &req.params {
                Some(v) => match serde_json::from_value(v.clone()) {
                    Ok(p) => p,
                    Err(e) => {
                        return Some(JsonRpcResponse::error(
                            req.id.clone(),
                            JsonRpcError::invalid_params(format!(
                                "Invalid tools/call params: {e}"
                            )),
                        ));
                    }
                },
                None => {
                    return Some(JsonRpcResponse::error(
                        req.id.clone(),
                        JsonRpcError::invalid_params("Missing params for tools/call"),
                    ));
                }
            };

            tracing::debug!(tool = %params.name, "tools/call");
            let tool_result = registry.call(&params.name, params.arguments).await;

            Some(JsonRpcResponse::success(req.id.clone(), tool_result.into_value()))
        }

        _ if req.is_notification() => None,

        _ => Some(JsonRpcResponse::error(
            req.id.clone(),
            JsonRpcError::method_not_found(&req.method),
        )),
    }
}
