//! Command-line and environment configuration

use clap::Parser;
use std::{
    net::{IpAddr, SocketAddr},
    path::{Path, PathBuf},
};

#[derive(Debug, Clone, Parser)]
#[command(
    name = "cre-leads-dashboard",
    version,
    about = "MCP server exposing the CRE leads dashboard widgets"
)]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "CRE_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 8000)]
    pub port: u16,

    /// Directory holding the built widget HTML (located automatically if unset)
    #[arg(long, env = "CRE_ASSETS_DIR")]
    pub assets_dir: Option<PathBuf>,
}

impl Config {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// The configured assets directory, or one located from the working directory.
    pub fn resolve_assets_dir(&self) -> PathBuf {
        if let Some(dir) = &self.assets_dir {
            return dir.clone();
        }
        let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        locate_assets_directory(&current_dir)
    }
}

/// Attempts to locate the assets directory using a multi-step strategy
pub fn locate_assets_directory(current_dir: &Path) -> PathBuf {
    // 1. ./assets
    // 2. ../assets (if running from a subdir)
    // 3. "assets" relative path
    if current_dir.join("assets").exists() {
        return current_dir.join("assets");
    }

    if let Some(parent) = current_dir.parent() {
        if parent.join("assets").exists() {
            return parent.join("assets");
        }
    }

    PathBuf::from("assets") // Fallback
}
