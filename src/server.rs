use tokio::io::{
    AsyncBufRead, AsyncBufReadExt, AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufReader,
};

use crate::handlers;
use crate::protocol::{JsonRpcError, JsonRpcRequest, JsonRpcResponse};
use crate::registry::ToolRegistry;

/// Maximum bytes per JSON-RPC message (1 MiB).
const MAX_MESSAGE_BYTES: usize = 1024 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("transport I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("response serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// MCP server that communicates over stdio using newline-delimited JSON-RPC 2.0.
pub struct McpServer {
    registry: ToolRegistry,
    initialized: bool,
}

impl McpServer {
    pub fn new(registry: ToolRegistry) -> Self {
        Self {
            registry,
            initialized: false,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Serve on the process's stdin/stdout until stdin closes.
    pub async fn run(&mut self) -> Result<(), ServerError> {
        self.serve(tokio::io::stdin(), tokio::io::stdout()).await
    }

    /// Serve one request at a time from `input`, writing responses to `output`.
    pub async fn serve<R, W>(&mut self, input: R, mut output: W) -> Result<(), ServerError>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut reader = BufReader::new(input);
        let mut raw = Vec::new();

        loop {
            raw.clear();
            let n = (&mut reader)
                .take(MAX_MESSAGE_BYTES as u64 + 1)
                .read_until(b'\n', &mut raw)
                .await?;
            if n == 0 {
                break;
            }

            if n > MAX_MESSAGE_BYTES {
                if raw.last() != Some(&b'\n') {
                    skip_line(&mut reader).await?;
                }
                tracing::warn!(limit = MAX_MESSAGE_BYTES, "message too large");
                write_response(
                    &mut output,
                    &JsonRpcResponse::error(None, JsonRpcError::parse_error()),
                )
                .await?;
                continue;
            }

            let trimmed = match std::str::from_utf8(&raw) {
                Ok(s) => s.trim(),
                Err(_) => {
                    tracing::warn!("message is not valid UTF-8");
                    write_response(
                        &mut output,
                        &JsonRpcResponse::error(None, JsonRpcError::parse_error()),
                    )
                    .await?;
                    continue;
                }
            };

            if trimmed.is_empty() {
                continue;
            }

            let req: JsonRpcRequest = match serde_json::from_str(trimmed) {
                Ok(r) => r,
                Err(e) => {
                    tracing::warn!(error = %e, "parse error");
                    write_response(
                        &mut output,
                        &JsonRpcResponse::error(None, JsonRpcError::parse_error()),
                    )
                    .await?;
                    continue;
                }
            };

            if req.jsonrpc != "2.0" {
                write_response(
                    &mut output,
                    &JsonRpcResponse::error(req.id.clone(), JsonRpcError::invalid_request()),
                )
                .await?;
                continue;
            }

            // Only `initialize` is allowed before the handshake completes
            if !self.initialized && req.method != "initialize" {
                if req.is_notification() {
                    continue;
                }
                write_response(
                    &mut output,
                    &JsonRpcResponse::error(
                        req.id.clone(),
                        JsonRpcError::invalid_request_with("Server not initialized"),
                    ),
                )
                .await?;
                continue;
            }

            if let Some(resp) = handlers::dispatch(&req, &self.registry).await {
                write_response(&mut output, &resp).await?;
            }

            if req.method == "initialize" {
                self.initialized = true;
            }
        }

        tracing::info!("input closed, shutting down");
        Ok(())
    }
}

/// Drop input up to and including the next newline without buffering it.
async fn skip_line<R>(reader: &mut R) -> Result<(), ServerError>
where
    R: AsyncBufRead + Unpin,
{
    loop {
        let (found, used) = {
            let buf = reader.fill_buf().await?;
            if buf.is_empty() {
                return Ok(());
            }
            match buf.iter().position(|&b| b == b'\n') {
                Some(i) => (true, i + 1),
                None => (false, buf.len()),
            }
        };
        reader.consume(used);
        if found {
            return Ok(());
        }
    }
}

async fn write_response<W>(output: &mut W, resp: &JsonRpcResponse) -> Result<(), ServerError>
where
    W: AsyncWrite + Unpin,
{
    let out = serde_json::to_string(resp)?;
    output.write_all(out.as_bytes()).await?;
    output.write_all(b"\n").await?;
    output.flush().await?;
    Ok(())
}
