//! CRE Leads Dashboard Library
//!
//! This library exposes the DuPage County commercial real estate leads
//! widgets over MCP (Model Context Protocol): three tools that render one
//! shared HTML bundle and echo their query back as structured content.

// Domain modules
pub mod mcp;
pub mod widgets;

// Infrastructure
pub mod config;
pub mod error;
pub mod logging;
pub mod router;
pub mod state;

pub use error::{Error, Result};
