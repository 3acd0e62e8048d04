use async_trait::async_trait;
use jsonschema::Validator;
use serde_json::Value;

use crate::protocol::{McpError, McpErrorCode, ToolResult};
use crate::schema;

/// A host-invokable MCP tool.
#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    /// JSON Schema of the `arguments` object.
    fn input_schema(&self) -> Value;

    async fn call(&self, arguments: Value) -> ToolResult;
}

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Tool '{0}' is already registered")]
    Duplicate(String),
    #[error("Tool '{name}' has an invalid input schema: {source}")]
    InvalidSchema {
        name: String,
        #[source]
        source: schema::SchemaValidationError,
    },
}

struct RegisteredTool {
    tool: Box<dyn Tool>,
    validator: Validator,
}

/// Tools served by one process, in registration order.
///
/// Built once at startup and handed to the server; nothing here is global.
#[derive(Default)]
pub struct ToolRegistry {
    tools: Vec<RegisteredTool>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, tool: Box<dyn Tool>) -> Result<(), RegistryError> {
        let name = tool.name().to_string();

        if self.is_registered(&name) {
            return Err(RegistryError::Duplicate(name));
        }

        let validator = schema::compile(&tool.input_schema())
            .map_err(|source| RegistryError::InvalidSchema { name: name.clone(), source })?;

        tracing::debug!(tool = %name, "registered tool");
        self.tools.push(RegisteredTool { tool, validator });
        Ok(())
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.tools.iter().any(|t| t.tool.name() == name)
    }

    pub fn tool_count(&self) -> usize {
        self.tools.len()
    }

    /// `tools/list` entries.
    pub fn descriptors(&self) -> Vec<Value> {
        self.tools
            .iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.tool.name(),
                    "description": t.tool.description(),
                    "inputSchema": t.tool.input_schema(),
                })
            })
            .collect()
    }

    /// Invoke a tool by name.
    ///
    /// Unknown names and arguments rejected by the tool's input schema come
    /// back as `isError` tool results, never as protocol errors. Missing
    /// arguments are treated as an empty object.
    pub async fn call(&self, name: &str, arguments: Option<Value>) -> ToolResult {
        let Some(entry) = self.tools.iter().find(|t| t.tool.name() == name) else {
            return McpError::new(
                McpErrorCode::UnknownTool,
                format!("Unknown tool: {name}"),
            )
            .into();
        };

        let arguments = arguments.unwrap_or_else(|| Value::Object(Default::default()));
        if let Err(e) = schema::validate(&entry.validator, &arguments) {
            tracing::debug!(tool = %name, error = %e, "rejected tool arguments");
            return McpError::new(
                McpErrorCode::InvalidArguments,
                format!("Invalid arguments for {name}: {e}"),
            )
            .into();
        }

        entry.tool.call(arguments).await
    }
}
