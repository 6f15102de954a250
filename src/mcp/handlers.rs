//! MCP (Model Context Protocol) route handlers
//!
//! Binds the JSON-RPC methods to the [`Dispatcher`](super::dispatcher::Dispatcher).
//! Tool failures travel inside successful JSON-RPC results; only malformed
//! requests produce JSON-RPC errors.

use super::{helpers::*, models::*};
use crate::state::SharedState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::post, Json, Router};
use serde_json::{json, Value};

/// Creates routes for MCP-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/", post(handle_mcp).get(handle_mcp_sse))
        .route("/mcp", post(handle_mcp).get(handle_mcp_sse)) // Standard endpoint
        .route("/mcp/", post(handle_mcp).get(handle_mcp_sse)) // Trailing slash safety
}

/// Handle SSE (Server-Sent Events) handshake for GET requests
async fn handle_mcp_sse() -> impl IntoResponse {
    (
        [("content-type", "text/event-stream")],
        "event: endpoint\ndata: /mcp\n\n",
    )
}

/// Endpoint: POST /mcp
/// Handles the Model Context Protocol communication for POST requests.
async fn handle_mcp(
    State(state): State<SharedState>,
    body: Result<Json<JsonRpcRequest>, axum::extract::rejection::JsonRejection>,
) -> impl IntoResponse {
    let req = match body {
        Ok(Json(r)) => r,
        Err(e) => {
            tracing::warn!(error = %e.body_text(), "JSON parse error");
            return (
                StatusCode::BAD_REQUEST,
                Json(rpc_error(Value::Null, -32700, "Parse error")),
            )
                .into_response();
        }
    };

    // Notifications expect no response body
    if req.method.starts_with("notifications/") {
        tracing::debug!(method = %req.method, "MCP notification");
        return StatusCode::ACCEPTED.into_response();
    }

    let id = req.id.unwrap_or(Value::Null);
    let params = req.params.unwrap_or(Value::Null);

    tracing::debug!(method = %req.method, id = %id, "MCP call");

    Json(dispatch(&state, &req.method, id, &params)).into_response()
}

/// Routes a JSON-RPC method to its handler and wraps the envelope.
fn dispatch(state: &SharedState, method: &str, id: Value, params: &Value) -> Value {
    let dispatcher = &state.dispatcher;

    match method {
        "initialize" => rpc_success(id, handle_initialize()),
        "ping" => rpc_success(id, json!({})),
        "tools/list" => rpc_success(id, json!({ "tools": dispatcher.list_tools() })),
        "resources/list" => rpc_success(id, json!({ "resources": dispatcher.list_resources() })),
        "resources/templates/list" => rpc_success(
            id,
            json!({ "resourceTemplates": dispatcher.list_resource_templates() }),
        ),
        "resources/read" => match params.get("uri").and_then(Value::as_str) {
            Some(uri) => rpc_result(id, &dispatcher.read_resource(uri)),
            None => rpc_error(id, -32602, "Missing resource uri"),
        },
        "tools/call" => match params.get("name").and_then(Value::as_str) {
            Some(name) => {
                let args = params.get("arguments").unwrap_or(&Value::Null);
                rpc_result(id, &dispatcher.call_tool(name, args))
            }
            None => rpc_error(id, -32602, "Missing tool name"),
        },
        _ => {
            tracing::warn!(method, "Unknown method");
            rpc_error(id, -32601, "Method not found")
        }
    }
}

/// Handles `initialize` request (Handshake).
fn handle_initialize() -> Value {
    json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": {
            "tools": { "listChanged": false },
            "resources": { "listChanged": false, "subscribe": false }
        },
        "serverInfo": {
            "name": SERVER_NAME,
            "version": env!("CARGO_PKG_VERSION")
        }
    })
}
