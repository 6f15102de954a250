//! Widget asset loading
//!
//! Resolves a component name to the HTML produced by the UI build. The exact
//! `<component>.html` wins; otherwise the lexicographically last
//! `<component>-*.html` is used (hashed or versioned build outputs).

use crate::error::{Error, Result};
use dashmap::DashMap;
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

/// Loads widget HTML from the assets directory and memoizes it per component.
pub struct AssetLoader {
    /// Directory containing the built HTML bundles.
    assets_dir: PathBuf,

    /// Loaded markup keyed by component name. Never evicted.
    cache: DashMap<String, Arc<str>>,
}

impl AssetLoader {
    pub fn new(assets_dir: impl Into<PathBuf>) -> Self {
        Self {
            assets_dir: assets_dir.into(),
            cache: DashMap::new(),
        }
    }

    pub fn assets_dir(&self) -> &Path {
        &self.assets_dir
    }

    /// Returns the HTML for `component`, reading it from disk at most once.
    pub async fn load(&self, component: &str) -> Result<Arc<str>> {
        if let Some(html) = self.cache.get(component) {
            tracing::debug!(component, "Widget HTML served from cache");
            return Ok(Arc::clone(html.value()));
        }

        let path = self.resolve(component).await?;
        let html = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| Error::ReadAsset {
                path: path.clone(),
                source,
            })?;

        if html.is_empty() {
            return Err(Error::EmptyAsset { path });
        }

        let html: Arc<str> = Arc::from(html);
        self.cache.insert(component.to_string(), Arc::clone(&html));

        Ok(html)
    }

    /// Picks the file backing `component`, preferring the exact name.
    async fn resolve(&self, component: &str) -> Result<PathBuf> {
        let primary_html_path = self.assets_dir.join(format!("{component}.html"));
        if is_file(&primary_html_path).await {
            tracing::info!(path = %primary_html_path.display(), "Loaded widget HTML");
            return Ok(primary_html_path);
        }

        match self.find_fallback_html_file(component).await? {
            Some(path) => {
                tracing::info!(path = %path.display(), "Loaded widget HTML from fallback");
                Ok(path)
            }
            None => {
                tracing::error!(
                    component,
                    dir = %self.assets_dir.display(),
                    "Widget HTML not found"
                );
                Err(Error::MissingAsset {
                    component: component.to_string(),
                    dir: self.assets_dir.clone(),
                })
            }
        }
    }

    /// Finds the lexicographically last `<component>-*.html` in the assets directory.
    ///
    /// A missing directory yields `None`; any other I/O failure aborts the scan.
    async fn find_fallback_html_file(&self, component: &str) -> Result<Option<PathBuf>> {
        let mut entries = match tokio::fs::read_dir(&self.assets_dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(self.scan_error(source)),
        };

        let prefix = format!("{component}-");
        let mut fallbacks = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|source| self.scan_error(source))?
        {
            let path = entry.path();
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if name.len() >= prefix.len() + ".html".len()
                && name.starts_with(&prefix)
                && name.ends_with(".html")
                && is_file(&path).await
            {
                fallbacks.push(path);
            }
        }

        fallbacks.sort();
        Ok(fallbacks.pop())
    }

    fn scan_error(&self, source: std::io::Error) -> Error {
        Error::ReadAsset {
            path: self.assets_dir.clone(),
            source,
        }
    }
}

async fn is_file(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|m| m.is_file())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, contents: &str) {
        std::fs::write(dir.path().join(name), contents).unwrap();
    }

    #[tokio::test]
    async fn loads_exact_file() {
        let dir = TempDir::new().unwrap();
        write(&dir, "foo.html", "<div>exact</div>");
        write(&dir, "foo-zzz.html", "<div>fallback</div>");

        let loader = AssetLoader::new(dir.path());
        let html = loader.load("foo").await.unwrap();

        assert_eq!(&*html, "<div>exact</div>");
    }

    #[tokio::test]
    async fn falls_back_to_suffixed_file() {
        let dir = TempDir::new().unwrap();
        write(&dir, "foo-v2.html", "<div>v2</div>");

        let loader = AssetLoader::new(dir.path());
        let html = loader.load("foo").await.unwrap();

        assert_eq!(&*html, "<div>v2</div>");
    }

    #[tokio::test]
    async fn picks_lexicographically_last_fallback() {
        let dir = TempDir::new().unwrap();
        write(&dir, "foo-a.html", "<div>a</div>");
        write(&dir, "foo-b.html", "<div>b</div>");
        write(&dir, "foobar.html", "<div>unrelated</div>");

        let loader = AssetLoader::new(dir.path());
        let html = loader.load("foo").await.unwrap();

        assert_eq!(&*html, "<div>b</div>");
    }

    #[tokio::test]
    async fn missing_asset_names_component_and_dir() {
        let dir = TempDir::new().unwrap();
        write(&dir, "other.html", "<div>other</div>");

        let loader = AssetLoader::new(dir.path());
        let err = loader.load("foo").await.unwrap_err();

        match err {
            Error::MissingAsset { component, dir: searched } => {
                assert_eq!(component, "foo");
                assert_eq!(searched, dir.path());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn missing_directory_is_missing_asset() {
        let dir = TempDir::new().unwrap();
        let loader = AssetLoader::new(dir.path().join("does-not-exist"));

        let err = loader.load("foo").await.unwrap_err();
        assert!(matches!(err, Error::MissingAsset { .. }));
    }

    #[tokio::test]
    async fn unreadable_assets_dir_is_read_error() {
        let dir = TempDir::new().unwrap();
        let not_a_dir = dir.path().join("assets");
        std::fs::write(&not_a_dir, "plain file").unwrap();

        let loader = AssetLoader::new(&not_a_dir);
        let err = loader.load("foo").await.unwrap_err();

        match err {
            Error::ReadAsset { path, .. } => assert_eq!(path, not_a_dir),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn empty_file_is_rejected() {
        let dir = TempDir::new().unwrap();
        write(&dir, "foo.html", "");

        let loader = AssetLoader::new(dir.path());
        let err = loader.load("foo").await.unwrap_err();

        assert!(matches!(err, Error::EmptyAsset { .. }));
    }

    #[tokio::test]
    async fn reads_disk_at_most_once() {
        let dir = TempDir::new().unwrap();
        write(&dir, "foo.html", "<div>first</div>");

        let loader = AssetLoader::new(dir.path());
        let first = loader.load("foo").await.unwrap();

        std::fs::remove_file(dir.path().join("foo.html")).unwrap();
        let second = loader.load("foo").await.unwrap();

        assert!(Arc::ptr_eq(&first, &second));
    }
}
