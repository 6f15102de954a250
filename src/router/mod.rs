//! Routing module for the dashboard server

use crate::state::SharedState;
use axum::{body::Body, extract::Request, middleware::Next, Router};
use tower_http::cors::{Any, CorsLayer};
use tracing::Instrument;
use uuid::Uuid;

/// Creates and configures the application router with all routes and middleware
pub fn create_app_router(state: SharedState) -> Router {
    // Middleware: one span per request
    let log_layer = axum::middleware::from_fn(|req: Request<Body>, next: Next| async move {
        let span = tracing::info_span!(
            "request",
            id = %Uuid::new_v4().simple(),
            method = %req.method(),
            uri = %req.uri(),
        );

        async move {
            tracing::info!("REQ");
            let res = next.run(req).await;
            if !res.status().is_success() {
                tracing::warn!(status = %res.status(), "RES error");
            }
            res
        }
        .instrument(span)
        .await
    });

    // Middleware: CORS (Permissive, widgets are served cross-origin)
    let cors_layer = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Routes
    Router::new()
        .merge(crate::mcp::routes())
        .layer(log_layer)
        .layer(cors_layer)
        .with_state(state)
}
