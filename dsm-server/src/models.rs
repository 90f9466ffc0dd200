use serde::{Deserialize, Serialize};

use dsm_core::query::Pagination;
use dsm_core::resolve::{ResolvedUsage, UsedByEntry};
use dsm_core::{App, Component, ComponentStatus};

/// List-endpoint projection of a component. Never the full entity:
/// breaking-change text and migration notes are omitted and the blocker
/// list collapses to a count.
#[derive(Debug, Clone, Serialize)]
pub struct ComponentSummary {
    pub id: String,
    pub name: String,
    pub status: ComponentStatus,
    #[serde(rename = "v1Package")]
    pub v1_package: String,
    #[serde(rename = "v1Name")]
    pub v1_name: String,
    #[serde(rename = "v2Package")]
    pub v2_package: Option<String>,
    #[serde(rename = "v2Name")]
    pub v2_name: Option<String>,
    #[serde(rename = "hasBreakingChanges")]
    pub has_breaking_changes: bool,
    #[serde(rename = "blockersCount")]
    pub blockers_count: usize,
}

impl From<&Component> for ComponentSummary {
    fn from(c: &Component) -> Self {
        Self {
            id: c.id.clone(),
            name: c.name.clone(),
            status: c.status,
            v1_package: c.v1_package.clone(),
            v1_name: c.v1_name.clone(),
            v2_package: c.v2_package.clone(),
            v2_name: c.v2_name.clone(),
            has_breaking_changes: c.has_breaking_changes,
            blockers_count: c.blockers.len(),
        }
    }
}

/// List-endpoint projection of an app.
#[derive(Debug, Clone, Serialize)]
pub struct AppSummary {
    pub id: String,
    pub name: String,
    pub team: String,
    #[serde(rename = "dsVersion")]
    pub ds_version: String,
    #[serde(rename = "migrationProgress")]
    pub migration_progress: u8,
    #[serde(rename = "blockersCount")]
    pub blockers_count: usize,
}

impl From<&App> for AppSummary {
    fn from(a: &App) -> Self {
        Self {
            id: a.id.clone(),
            name: a.name.clone(),
            team: a.team.clone(),
            ds_version: a.ds_version.clone(),
            migration_progress: a.migration_progress,
            blockers_count: a.blockers.len(),
        }
    }
}

/// Envelope for paginated list responses.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub pagination: Pagination,
}

/// Full component plus the apps that use it.
#[derive(Debug, Serialize)]
pub struct ComponentDetail {
    #[serde(flatten)]
    pub component: Component,
    #[serde(rename = "usedBy")]
    pub used_by: Vec<UsedByEntry>,
}

/// Full app with its usage entries resolved against the components
/// collection.
#[derive(Debug, Serialize)]
pub struct AppDetail {
    pub id: String,
    pub name: String,
    pub team: String,
    #[serde(rename = "dsVersion")]
    pub ds_version: String,
    #[serde(rename = "migrationProgress")]
    pub migration_progress: u8,
    pub blockers: Vec<String>,
    #[serde(rename = "componentUsage")]
    pub component_usage: Vec<ResolvedUsage>,
}

// Query parameters are deserialized as raw strings so malformed values can
// degrade to defaults instead of rejecting the request.

#[derive(Debug, Default, Deserialize)]
pub struct ComponentListQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AppListQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub team: Option<String>,
    #[serde(rename = "hasBlockers")]
    pub has_blockers: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct BlockersQuery {
    pub limit: Option<String>,
}
