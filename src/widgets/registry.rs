//! Widget Registry
//!
//! The fixed, ordered widget list plus its two lookup indexes. Built once
//! before the server binds; read-only afterwards.

use super::{
    assets::AssetLoader,
    models::{WidgetDefinition, WidgetSpec},
};
use crate::error::{Error, Result};
use std::collections::HashMap;

#[derive(Debug)]
pub struct WidgetRegistry {
    widgets: Vec<WidgetDefinition>,

    /// identifier -> position in `widgets`
    by_id: HashMap<String, usize>,

    /// template URI -> position of the first widget registered under it
    by_uri: HashMap<String, usize>,
}

impl WidgetRegistry {
    /// Builds the registry from already loaded definitions.
    ///
    /// Fails on an empty list or a repeated identifier. Shared template URIs
    /// are allowed; the URI index keeps the first registration.
    pub fn new(widgets: Vec<WidgetDefinition>) -> Result<Self> {
        if widgets.is_empty() {
            return Err(Error::EmptyRegistry);
        }

        let mut by_id = HashMap::with_capacity(widgets.len());
        let mut by_uri = HashMap::new();

        for (index, widget) in widgets.iter().enumerate() {
            if by_id.insert(widget.identifier.clone(), index).is_some() {
                return Err(Error::DuplicateWidget {
                    identifier: widget.identifier.clone(),
                });
            }
            by_uri.entry(widget.template_uri.clone()).or_insert(index);
        }

        Ok(Self {
            widgets,
            by_id,
            by_uri,
        })
    }

    /// Loads the markup for every spec and builds the registry.
    ///
    /// Any missing asset aborts the whole build; there is no partial registry.
    pub async fn load(specs: &[WidgetSpec], loader: &AssetLoader) -> Result<Self> {
        let mut widgets = Vec::with_capacity(specs.len());
        for spec in specs {
            let html = loader.load(spec.component).await?;
            widgets.push(WidgetDefinition::from_spec(spec, html));
        }

        let registry = Self::new(widgets)?;

        tracing::info!(
            assets_dir = %loader.assets_dir().display(),
            count = registry.len(),
            widgets = ?registry.identifiers().collect::<Vec<_>>(),
            "Widget registry initialized"
        );

        Ok(registry)
    }

    /// Widgets in registration order.
    pub fn widgets(&self) -> &[WidgetDefinition] {
        &self.widgets
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.widgets.iter().map(|w| w.identifier.as_str())
    }

    pub fn get_by_id(&self, identifier: &str) -> Option<&WidgetDefinition> {
        self.by_id.get(identifier).map(|&i| &self.widgets[i])
    }

    pub fn get_by_uri(&self, uri: &str) -> Option<&WidgetDefinition> {
        self.by_uri.get(uri).map(|&i| &self.widgets[i])
    }
}
