//! Protocol operations over the widget registry
//!
//! Every operation is a synchronous lookup. Failures are folded into the
//! result shapes clients expect:
//! - `read_resource` reports an unknown URI inline, in `_meta.error`, with an
//!   empty content list.
//! - `call_tool` reports unknown tools and invalid arguments with `isError`.

use super::{
    helpers::{tool_input_schema, tool_invocation_meta, tool_meta},
    models::*,
    validation::validate_dashboard_input,
};
use crate::widgets::WidgetRegistry;
use serde_json::{json, Value};

pub struct Dispatcher {
    registry: WidgetRegistry,
}

impl Dispatcher {
    pub fn new(registry: WidgetRegistry) -> Self {
        Self { registry }
    }

    /// One descriptor per widget, in registration order.
    pub fn list_tools(&self) -> Vec<ToolDescriptor> {
        let tools: Vec<_> = self
            .registry
            .widgets()
            .iter()
            .map(|widget| ToolDescriptor {
                name: widget.identifier.clone(),
                title: widget.title.clone(),
                description: widget.title.clone(),
                input_schema: tool_input_schema(),
                meta: tool_meta(widget),
                annotations: ToolAnnotations::read_only(),
            })
            .collect();

        tracing::info!(
            count = tools.len(),
            tools = ?tools.iter().map(|t| t.name.as_str()).collect::<Vec<_>>(),
            "list_tools"
        );
        tools
    }

    /// One catalog entry per widget; shared URIs are listed once per widget.
    pub fn list_resources(&self) -> Vec<ResourceDescriptor> {
        let resources: Vec<_> = self
            .registry
            .widgets()
            .iter()
            .map(|widget| ResourceDescriptor {
                name: widget.title.clone(),
                title: widget.title.clone(),
                uri: widget.template_uri.clone(),
                description: widget.resource_description(),
                mime_type: WIDGET_MIME_TYPE.to_string(),
                meta: tool_meta(widget),
            })
            .collect();

        tracing::info!(count = resources.len(), "list_resources");
        resources
    }

    /// Same entries as `list_resources`, in the template slot.
    pub fn list_resource_templates(&self) -> Vec<ResourceTemplateDescriptor> {
        let templates: Vec<_> = self
            .registry
            .widgets()
            .iter()
            .map(|widget| ResourceTemplateDescriptor {
                name: widget.title.clone(),
                title: widget.title.clone(),
                uri_template: widget.template_uri.clone(),
                description: widget.resource_description(),
                mime_type: WIDGET_MIME_TYPE.to_string(),
                meta: tool_meta(widget),
            })
            .collect();

        tracing::info!(count = templates.len(), "list_resource_templates");
        templates
    }

    pub fn read_resource(&self, uri: &str) -> ReadResourceResult {
        let Some(widget) = self.registry.get_by_uri(uri) else {
            tracing::warn!(uri, "Unknown resource URI");
            return ReadResourceResult {
                contents: Vec::new(),
                meta: Some(json!({ "error": format!("Unknown resource: {uri}") })),
            };
        };

        tracing::info!(
            uri,
            widget = %widget.identifier,
            bytes = widget.html.len(),
            "read_resource"
        );

        ReadResourceResult {
            contents: vec![ResourceContent {
                uri: widget.template_uri.clone(),
                mime_type: WIDGET_MIME_TYPE.to_string(),
                text: widget.html.to_string(),
                meta: tool_meta(widget),
            }],
            meta: None,
        }
    }

    /// Resolves the widget and echoes the validated query.
    ///
    /// The query never influences which widget or text is returned.
    pub fn call_tool(&self, name: &str, args: &Value) -> CallToolResult {
        let Some(widget) = self.registry.get_by_id(name) else {
            tracing::warn!(tool = name, "Unknown tool");
            return CallToolResult::error(format!("Unknown tool: {name}"));
        };

        let input = match validate_dashboard_input(args) {
            Ok(input) => input,
            Err(e) => {
                tracing::warn!(tool = name, error = %e, "Input validation error");
                return CallToolResult::error(format!("Input validation error: {e}"));
            }
        };

        tracing::info!(tool = name, query = %input.query, "call_tool");

        CallToolResult {
            content: vec![ContentBlock::text(widget.response_text.clone())],
            structured_content: Some(json!({ "query": input.query })),
            is_error: false,
            meta: Some(tool_invocation_meta(widget)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::{
        catalog::{LEADS_DASHBOARD_TOOL, WIDGETS},
        models::DASHBOARD_TEMPLATE_URI,
        WidgetDefinition,
    };
    use std::sync::Arc;

    fn dispatcher() -> Dispatcher {
        let html: Arc<str> = Arc::from("<div id=\"root\"></div>");
        let widgets = WIDGETS
            .iter()
            .map(|spec| WidgetDefinition::from_spec(spec, Arc::clone(&html)))
            .collect();
        Dispatcher::new(WidgetRegistry::new(widgets).unwrap())
    }

    #[test]
    fn tools_follow_registration_order() {
        let tools = dispatcher().list_tools();

        let names: Vec<_> = tools.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["cre-leads-dashboard", "property-tracker", "lead-contacts"]);

        for tool in &tools {
            assert_eq!(tool.description, tool.title);
            assert_eq!(tool.input_schema, tools[0].input_schema);
            assert_eq!(tool.annotations, ToolAnnotations::read_only());
        }
    }

    #[test]
    fn resources_keep_one_entry_per_widget() {
        let d = dispatcher();
        let resources = d.list_resources();
        let templates = d.list_resource_templates();

        assert_eq!(resources.len(), 3);
        assert_eq!(templates.len(), 3);
        for (resource, template) in resources.iter().zip(&templates) {
            assert_eq!(resource.uri, DASHBOARD_TEMPLATE_URI);
            assert_eq!(template.uri_template, resource.uri);
            assert_eq!(template.name, resource.name);
            assert_eq!(resource.description, format!("{} widget markup", resource.title));
        }
    }

    #[test]
    fn read_resource_returns_first_registered_markup() {
        let result = dispatcher().read_resource(DASHBOARD_TEMPLATE_URI);

        assert!(result.meta.is_none());
        assert_eq!(result.contents.len(), 1);
        assert_eq!(result.contents[0].text, "<div id=\"root\"></div>");
        assert_eq!(result.contents[0].mime_type, WIDGET_MIME_TYPE);
        assert_eq!(
            result.contents[0].meta["openai/toolInvocation/invoked"],
            "Leads dashboard ready"
        );
    }

    #[test]
    fn read_unknown_resource_is_soft_failure() {
        let result = dispatcher().read_resource("unknown://uri");

        assert!(result.contents.is_empty());
        assert_eq!(
            result.meta.unwrap()["error"],
            "Unknown resource: unknown://uri"
        );
    }

    #[test]
    fn call_tool_echoes_query_without_changing_output() {
        let d = dispatcher();
        let plain = d.call_tool(LEADS_DASHBOARD_TOOL, &json!({}));
        let focused = d.call_tool(LEADS_DASHBOARD_TOOL, &json!({ "query": "office buildings" }));

        assert!(!plain.is_error);
        assert_eq!(plain.structured_content, Some(json!({ "query": "" })));
        assert_eq!(
            focused.structured_content,
            Some(json!({ "query": "office buildings" }))
        );
        assert_eq!(plain.content, focused.content);
        assert_eq!(plain.meta, focused.meta);
    }

    #[test]
    fn call_unknown_tool_is_error() {
        let result = dispatcher().call_tool("does-not-exist", &json!({}));

        assert!(result.is_error);
        assert_eq!(
            result.content,
            vec![ContentBlock::text("Unknown tool: does-not-exist")]
        );
    }

    #[test]
    fn call_tool_with_bad_arguments_is_error() {
        let d = dispatcher();
        for args in [json!({ "query": 123 }), json!({ "unexpected": "x" })] {
            let result = d.call_tool(LEADS_DASHBOARD_TOOL, &args);
            assert!(result.is_error);
            assert!(result.structured_content.is_none());

            let ContentBlock::Text { text } = &result.content[0];
            assert!(text.starts_with("Input validation error: "));
        }
    }

    #[test]
    fn listings_are_stable() {
        let d = dispatcher();
        let first = serde_json::to_string(&d.list_resources()).unwrap();
        let second = serde_json::to_string(&d.list_resources()).unwrap();
        assert_eq!(first, second);
    }
}
