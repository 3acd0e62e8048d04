//! MCP server for the Olografix HQ status.
//!
//! Exposes a single `get_status` tool over JSON-RPC 2.0 stdio transport,
//! compatible with any MCP-aware AI agent. The tool reads
//! <https://sede.olografix.org/status> and answers `open`, `closed`, or
//! `Unable to fetch status.`.

pub mod config;
pub mod fetcher;
pub mod handlers;
pub mod protocol;
pub mod registry;
pub mod server;

pub mod schema;
