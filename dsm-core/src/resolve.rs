use serde::Serialize;

use crate::domain::{App, Component, ComponentStatus, UsageVersion};

/// Name substituted when a usage entry references a component that no
/// longer exists in the components collection.
pub const UNKNOWN_COMPONENT_NAME: &str = "Unknown";

/// One app that uses a given component.
#[derive(Debug, Clone, Serialize)]
pub struct UsedByEntry {
    #[serde(rename = "appId")]
    pub app_id: String,
    #[serde(rename = "appName")]
    pub app_name: String,
    pub version: UsageVersion,
    #[serde(rename = "usageCount")]
    pub usage_count: u32,
}

/// Component -> apps join: every app whose usage list references the
/// component id, with version and count taken from the first matching
/// usage entry. Duplicate entries for the same component id are not
/// aggregated; only the first one counts.
pub fn used_by(apps: &[App], component_id: &str) -> Vec<UsedByEntry> {
    apps.iter()
        .filter_map(|app| {
            app.component_usage
                .iter()
                .find(|u| u.component_id == component_id)
                .map(|usage| UsedByEntry {
                    app_id: app.id.clone(),
                    app_name: app.name.clone(),
                    version: usage.version,
                    usage_count: usage.usage_count,
                })
        })
        .collect()
}

/// A usage entry resolved against the current components collection.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedUsage {
    #[serde(rename = "componentId")]
    pub component_id: String,
    #[serde(rename = "componentName")]
    pub component_name: String,
    #[serde(rename = "componentStatus")]
    pub component_status: ComponentStatus,
    pub version: UsageVersion,
    #[serde(rename = "usageCount")]
    pub usage_count: u32,
}

/// App -> components join: resolve each usage entry to the component's
/// current name and status. A dangling component id is tolerated; the
/// entry is still emitted with placeholder values.
pub fn resolve_usage(components: &[Component], app: &App) -> Vec<ResolvedUsage> {
    app.component_usage
        .iter()
        .map(|usage| {
            let component = components.iter().find(|c| c.id == usage.component_id);
            ResolvedUsage {
                component_id: usage.component_id.clone(),
                component_name: component
                    .map(|c| c.name.clone())
                    .unwrap_or_else(|| UNKNOWN_COMPONENT_NAME.to_string()),
                component_status: component
                    .map(|c| c.status)
                    .unwrap_or(ComponentStatus::NotStarted),
                version: usage.version,
                usage_count: usage.usage_count,
            }
        })
        .collect()
}
