//! Startup and configuration errors
//!
//! Everything in here is fatal: the server refuses to become ready rather
//! than serve a partial widget set. Per-request failures never use this type;
//! the MCP layer turns them into protocol results instead.

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Widget HTML for \"{component}\" not found in {}", .dir.display())]
    MissingAsset { component: String, dir: PathBuf },

    #[error("Failed to read widget HTML at {}: {source}", .path.display())]
    ReadAsset {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Widget HTML at {} is empty", .path.display())]
    EmptyAsset { path: PathBuf },

    #[error("Duplicate widget identifier: {identifier}")]
    DuplicateWidget { identifier: String },

    #[error("No widgets registered")]
    EmptyRegistry,

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}
