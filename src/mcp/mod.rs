//! Model Context Protocol (MCP) server implementation.
//!
//! Exposes directive checking to AI assistants over stdio.
//!
//! ## Module Structure
//!
//! - `server`: Main MCP server implementation
//! - `types`: Tool parameter and result types

mod server;
pub mod types;

pub use server::{NolintlintMcpServer, run_server};
