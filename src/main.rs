use sede_mcp_server::config::ServerConfig;
use sede_mcp_server::handlers;
use sede_mcp_server::server::McpServer;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // stdout carries JSON-RPC; logs go to stderr only
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let config = match ServerConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("configuration error: {e}");
            std::process::exit(1);
        }
    };

    let registry = match handlers::build_registry(&config) {
        Ok(r) => r,
        Err(e) => {
            tracing::error!("tool registration failed: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(
        status_url = %config.status_url,
        tools = registry.tool_count(),
        "sede-mcp-server starting on stdio"
    );

    let mut server = McpServer::new(registry);
    if let Err(e) = server.run().await {
        tracing::error!("fatal error: {e}");
        std::process::exit(1);
    }
}
