use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Migration lifecycle of a design-system component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentStatus {
    NotStarted,
    InProgress,
    Migrated,
    Deprecated,
}

impl ComponentStatus {
    /// Wire-format name, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentStatus::NotStarted => "not_started",
            ComponentStatus::InProgress => "in_progress",
            ComponentStatus::Migrated => "migrated",
            ComponentStatus::Deprecated => "deprecated",
        }
    }
}

/// Which major version of a component an app imports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UsageVersion {
    V1,
    V2,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Component {
    pub id: String,
    pub name: String,
    pub status: ComponentStatus,
    #[serde(rename = "v1Package")]
    pub v1_package: String,
    #[serde(rename = "v1Name")]
    pub v1_name: String,
    // v2 coordinates stay null until migration has started
    #[serde(rename = "v2Package")]
    pub v2_package: Option<String>,
    #[serde(rename = "v2Name")]
    pub v2_name: Option<String>,
    #[serde(rename = "hasBreakingChanges")]
    pub has_breaking_changes: bool,
    #[serde(rename = "breakingChanges")]
    pub breaking_changes: Vec<String>,
    #[serde(rename = "migrationNotes")]
    pub migration_notes: Option<String>,
    pub blockers: Vec<String>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl Component {
    pub fn is_blocked(&self) -> bool {
        !self.blockers.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentUsage {
    #[serde(rename = "componentId")]
    pub component_id: String,
    pub version: UsageVersion,
    #[serde(rename = "usageCount")]
    pub usage_count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct App {
    pub id: String,
    pub name: String,
    pub team: String,
    #[serde(rename = "dsVersion")]
    pub ds_version: String,
    /// 0 = not started, 100 = fully migrated, anything between = in progress
    #[serde(rename = "migrationProgress")]
    pub migration_progress: u8,
    pub blockers: Vec<String>,
    #[serde(rename = "componentUsage")]
    pub component_usage: Vec<ComponentUsage>,
}

impl App {
    pub fn is_blocked(&self) -> bool {
        !self.blockers.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
}

/// One sample of the remaining-components time series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BurndownPoint {
    pub date: NaiveDate,
    pub remaining: u32,
}
