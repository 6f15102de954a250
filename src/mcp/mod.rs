//! Model Context Protocol (MCP) Module
//!
//! This module contains all MCP protocol implementation, including:
//! - Protocol models (JsonRpcRequest, descriptors, results, constants)
//! - RPC helpers (success/error responses, widget metadata, input schema)
//! - Tool argument validation
//! - The dispatcher implementing list/read/call against the widget registry
//! - HTTP handlers (initialize, tools/list, tools/call, etc.)

pub mod dispatcher;
pub mod handlers;
pub mod helpers;
pub mod models;
pub mod validation;

// Re-export commonly used types and functions
pub use dispatcher::Dispatcher;
pub use handlers::routes;
