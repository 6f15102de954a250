//! The widgets this server registers at startup.

use super::models::{WidgetSpec, DASHBOARD_COMPONENT, DASHBOARD_TEMPLATE_URI};

/// Tool name of the full leads dashboard
pub const LEADS_DASHBOARD_TOOL: &str = "cre-leads-dashboard";
/// Tool name of the property tracker view
pub const PROPERTY_TRACKER_TOOL: &str = "property-tracker";
/// Tool name of the lead contacts view
pub const LEAD_CONTACTS_TOOL: &str = "lead-contacts";

/// Registration order is the order tools and resources are listed in.
pub const WIDGETS: [WidgetSpec; 3] = [
    WidgetSpec {
        identifier: LEADS_DASHBOARD_TOOL,
        title: "Show Commercial Real Estate Leads Dashboard",
        template_uri: DASHBOARD_TEMPLATE_URI,
        component: DASHBOARD_COMPONENT,
        invoking: "Loading DuPage County CRE leads...",
        invoked: "Leads dashboard ready",
        response_text: "Here's your DuPage County commercial real estate leads dashboard showing active properties, contacts, and notes.",
    },
    WidgetSpec {
        identifier: PROPERTY_TRACKER_TOOL,
        title: "Track Properties",
        template_uri: DASHBOARD_TEMPLATE_URI,
        component: DASHBOARD_COMPONENT,
        invoking: "Fetching properties...",
        invoked: "Properties loaded",
        response_text: "Displaying your commercial properties in DuPage County with buy/sell status and contact information.",
    },
    WidgetSpec {
        identifier: LEAD_CONTACTS_TOOL,
        title: "View Lead Contacts",
        template_uri: DASHBOARD_TEMPLATE_URI,
        component: DASHBOARD_COMPONENT,
        invoking: "Loading contacts and notes...",
        invoked: "Contacts loaded",
        response_text: "Here are your lead contacts with their associated notes and property information.",
    },
];
