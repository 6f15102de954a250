//! Widget Domain Models

use std::sync::Arc;

/// Template URI shared by every dashboard widget
pub const DASHBOARD_TEMPLATE_URI: &str = "ui://widget/sales-dashboard.html";
/// Name of the UI bundle backing the dashboard widgets
pub const DASHBOARD_COMPONENT: &str = "sales-dashboard";

/// Literal description of a widget, before its markup is loaded.
#[derive(Debug, Clone, Copy)]
pub struct WidgetSpec {
    pub identifier: &'static str,
    pub title: &'static str,
    pub template_uri: &'static str,
    /// Asset component the markup is loaded from
    pub component: &'static str,
    pub invoking: &'static str,
    pub invoked: &'static str,
    pub response_text: &'static str,
}

/// A widget exposed both as a tool (by identifier) and a resource (by URI).
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetDefinition {
    /// Unique tool name
    pub identifier: String,

    /// Display name, used for tool title/description and resource name
    pub title: String,

    /// UI resource URI. Several widgets may share one.
    pub template_uri: String,

    /// Status shown while the tool runs
    pub invoking: String,

    /// Status shown once the tool has run
    pub invoked: String,

    /// Full markup payload, shared between widgets backed by the same bundle
    pub html: Arc<str>,

    /// Confirmation text returned by a successful call
    pub response_text: String,
}

impl WidgetDefinition {
    pub fn from_spec(spec: &WidgetSpec, html: Arc<str>) -> Self {
        Self {
            identifier: spec.identifier.to_string(),
            title: spec.title.to_string(),
            template_uri: spec.template_uri.to_string(),
            invoking: spec.invoking.to_string(),
            invoked: spec.invoked.to_string(),
            html,
            response_text: spec.response_text.to_string(),
        }
    }

    /// Description used for the resource catalog entries.
    pub fn resource_description(&self) -> String {
        format!("{} widget markup", self.title)
    }
}
