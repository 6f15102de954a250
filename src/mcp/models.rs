//! MCP Protocol Models and Constants
//!
//! This module contains all data structures and constants related to the
//! Model Context Protocol (MCP) specification.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// =============================================================================
// MCP Constants
// =============================================================================

/// MIME type for widget markup
pub const WIDGET_MIME_TYPE: &str = "text/html+skybridge";
/// Server identifier
pub const SERVER_NAME: &str = "cre-leads-dashboard";
/// Protocol version for MCP
pub const PROTOCOL_VERSION: &str = "2024-11-05";
/// Description of the `query` tool argument
pub const QUERY_DESCRIPTION: &str = "Optional query to filter or focus the dashboard view (e.g., 'buy properties', 'high priority', 'office buildings').";

// =============================================================================
// MCP Protocol Models
// =============================================================================

/// Standard JSON-RPC 2.0 Request envelope
#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    /// Protocol version (should be "2.0")
    #[allow(dead_code)]
    pub jsonrpc: Option<String>,

    /// Method name to invoke
    pub method: String,

    /// Parameters for the method
    pub params: Option<Value>,

    /// Request identifier
    pub id: Option<Value>,
}

/// Behaviour hints attached to every tool
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ToolAnnotations {
    pub destructive_hint: bool,
    pub open_world_hint: bool,
    pub read_only_hint: bool,
}

impl ToolAnnotations {
    pub fn read_only() -> Self {
        Self {
            destructive_hint: false,
            open_world_hint: false,
            read_only_hint: true,
        }
    }
}

/// Entry of a `tools/list` response
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ToolDescriptor {
    pub name: String,
    pub title: String,
    pub description: String,
    pub input_schema: Value,
    #[serde(rename = "_meta")]
    pub meta: Value,
    pub annotations: ToolAnnotations,
}

/// Entry of a `resources/list` response
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDescriptor {
    pub name: String,
    pub title: String,
    pub uri: String,
    pub description: String,
    pub mime_type: String,
    #[serde(rename = "_meta")]
    pub meta: Value,
}

/// Entry of a `resources/templates/list` response
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResourceTemplateDescriptor {
    pub name: String,
    pub title: String,
    pub uri_template: String,
    pub description: String,
    pub mime_type: String,
    #[serde(rename = "_meta")]
    pub meta: Value,
}

/// Text payload of a `resources/read` response
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResourceContent {
    pub uri: String,
    pub mime_type: String,
    pub text: String,
    #[serde(rename = "_meta")]
    pub meta: Value,
}

/// Result of `resources/read`.
///
/// An unknown URI yields no contents and an `error` entry in `_meta`; the
/// call itself still succeeds.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ReadResourceResult {
    pub contents: Vec<ResourceContent>,
    #[serde(rename = "_meta", skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
}

/// Content block of a tool result
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    Text { text: String },
}

impl ContentBlock {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }
}

/// Result of `tools/call`
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CallToolResult {
    pub content: Vec<ContentBlock>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub structured_content: Option<Value>,
    pub is_error: bool,
    #[serde(rename = "_meta", skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
}

impl CallToolResult {
    /// A failed call: one text block and `isError` set.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            content: vec![ContentBlock::text(message)],
            structured_content: None,
            is_error: true,
            meta: None,
        }
    }
}
