//! Widget Domain Module
//!
//! This module contains the dashboard widgets and everything needed to
//! materialize them at startup:
//! - Asset loading with fallback and caching
//! - Widget models and the literal catalog
//! - The read-only registry with identifier and URI indexes

pub mod assets;
pub mod catalog;
pub mod models;
pub mod registry;

// Re-export commonly used types for convenience
pub use assets::AssetLoader;
pub use models::WidgetDefinition;
pub use registry::WidgetRegistry;
