//! MCP Protocol Helpers
//!
//! This module contains helper functions for JSON-RPC communication
//! and OpenAI widget metadata construction.

use super::models::QUERY_DESCRIPTION;
use crate::widgets::WidgetDefinition;
use serde::Serialize;
use serde_json::{json, Value};

/// Constructs the metadata the OpenAI widget system expects on descriptors.
///
/// The fields are defined by the Apps SDK:
/// - `openai/outputTemplate` – URI of the widget HTML.
/// - `openai/toolInvocation/invoking` / `invoked` – lifecycle status strings.
/// - `openai/widgetAccessible` – the widget may call back into tools.
/// - `openai/resultCanProduceWidget` – results of this tool render the widget.
pub fn tool_meta(widget: &WidgetDefinition) -> Value {
    json!({
        "openai/outputTemplate": widget.template_uri,
        "openai/toolInvocation/invoking": widget.invoking,
        "openai/toolInvocation/invoked": widget.invoked,
        "openai/widgetAccessible": true,
        "openai/resultCanProduceWidget": true,
    })
}

/// Metadata attached to a successful tool call.
pub fn tool_invocation_meta(widget: &WidgetDefinition) -> Value {
    json!({
        "openai/toolInvocation/invoking": widget.invoking,
        "openai/toolInvocation/invoked": widget.invoked,
    })
}

/// Input schema shared by all dashboard tools: one optional string, nothing else.
pub fn tool_input_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "query": {
                "type": "string",
                "description": QUERY_DESCRIPTION,
            }
        },
        "required": [],
        "additionalProperties": false,
    })
}

/// Builds a JSON-RPC 2.0 success response.
///
/// # Arguments
///
/// * `id` – The request identifier that must be echoed back.
/// * `result` – The payload representing the successful outcome.
///
/// # Returns
///
/// A `serde_json::Value` shaped as a JSON-RPC success envelope.
pub fn rpc_success(id: Value, result: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "result": result,
    })
}

/// Builds a JSON-RPC 2.0 error response.
///
/// # Arguments
///
/// * `id` – The request identifier (or `null` if unavailable).
/// * `code` – The JSON-RPC error code (e.g., -32601 for method not found).
/// * `message` – Human-readable description of the error.
///
/// # Returns
///
/// A `serde_json::Value` shaped as a JSON-RPC error envelope.
pub fn rpc_error(id: Value, code: i32, message: impl Into<String>) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "error": {
            "code": code,
            "message": message.into(),
        }
    })
}

/// Serializes a typed result into a success envelope, or an internal error.
pub fn rpc_result<T: Serialize>(id: Value, result: &T) -> Value {
    match serde_json::to_value(result) {
        Ok(value) => rpc_success(id, value),
        Err(e) => {
            tracing::error!(error = %e, "Failed to serialize result");
            rpc_error(id, -32603, "Internal error")
        }
    }
}
