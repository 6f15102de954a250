use clap::Parser;
use cre_leads_dashboard::config::Config;
use cre_leads_dashboard::router::create_app_router;
use cre_leads_dashboard::state::AppState;
use cre_leads_dashboard::{logging, Error};
use std::process::ExitCode;
use std::sync::Arc;

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env if present (dev only)
    let _ = dotenvy::dotenv();
    let config = Config::parse();

    if let Err(e) = logging::init() {
        eprintln!("Failed to initialize logging: {e}");
    }

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Server stopped");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: Config) -> cre_leads_dashboard::Result<()> {
    let assets_dir = config.resolve_assets_dir();

    // Every widget must load before the listener binds
    let state = Arc::new(AppState::load(&assets_dir).await?);

    // Build application router with all routes and middleware
    let app = create_app_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| Error::Bind { addr, source })?;

    tracing::info!(%addr, assets_dir = %assets_dir.display(), "Server running");

    axum::serve(listener, app).await.map_err(Error::Serve)
}
