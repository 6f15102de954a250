//! Application State
//!
//! Built once before the listener binds and shared read-only by every request.

use crate::error::Result;
use crate::mcp::Dispatcher;
use crate::widgets::{catalog::WIDGETS, AssetLoader, WidgetRegistry};
use std::{path::PathBuf, sync::Arc};

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub dispatcher: Dispatcher,
}

impl AppState {
    pub fn new(registry: WidgetRegistry) -> Self {
        Self {
            dispatcher: Dispatcher::new(registry),
        }
    }

    /// Loads every catalog widget from `assets_dir`. Fails if any asset is missing.
    pub async fn load(assets_dir: impl Into<PathBuf>) -> Result<Self> {
        let loader = AssetLoader::new(assets_dir);
        let registry = WidgetRegistry::load(&WIDGETS, &loader).await?;
        Ok(Self::new(registry))
    }
}
