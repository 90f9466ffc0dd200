use serde::Serialize;

use crate::domain::{App, Component, ComponentStatus};
use crate::store::FixtureStore;

/// Summary counts over the full component collection.
#[derive(Debug, Clone, Serialize)]
pub struct ComponentStats {
    pub total: usize,
    #[serde(rename = "notStarted")]
    pub not_started: usize,
    #[serde(rename = "inProgress")]
    pub in_progress: usize,
    pub migrated: usize,
    pub deprecated: usize,
    pub blocked: usize,
}

/// Summary counts over the full app collection, bucketed by progress.
#[derive(Debug, Clone, Serialize)]
pub struct AppStats {
    pub total: usize,
    #[serde(rename = "notStarted")]
    pub not_started: usize,
    #[serde(rename = "inProgress")]
    pub in_progress: usize,
    #[serde(rename = "fullyMigrated")]
    pub fully_migrated: usize,
    pub blocked: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct MigrationStats {
    pub components: ComponentStats,
    pub apps: AppStats,
}

/// Recomputed on every stats request; nothing is cached.
pub fn migration_stats(store: &FixtureStore) -> MigrationStats {
    MigrationStats {
        components: component_stats(store.components()),
        apps: app_stats(store.apps()),
    }
}

pub fn component_stats(components: &[Component]) -> ComponentStats {
    let by_status = |status: ComponentStatus| {
        components.iter().filter(|c| c.status == status).count()
    };

    ComponentStats {
        total: components.len(),
        not_started: by_status(ComponentStatus::NotStarted),
        in_progress: by_status(ComponentStatus::InProgress),
        migrated: by_status(ComponentStatus::Migrated),
        deprecated: by_status(ComponentStatus::Deprecated),
        // blocked is independent of status; a migrated component can still
        // carry blockers
        blocked: components.iter().filter(|c| c.is_blocked()).count(),
    }
}

pub fn app_stats(apps: &[App]) -> AppStats {
    AppStats {
        total: apps.len(),
        not_started: apps.iter().filter(|a| a.migration_progress == 0).count(),
        in_progress: apps
            .iter()
            .filter(|a| a.migration_progress > 0 && a.migration_progress < 100)
            .count(),
        fully_migrated: apps.iter().filter(|a| a.migration_progress == 100).count(),
        blocked: apps.iter().filter(|a| a.is_blocked()).count(),
    }
}

/// What kind of entity a blocker entry refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockerKind {
    Component,
    App,
}

#[derive(Debug, Clone, Serialize)]
pub struct BlockerEntry {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: BlockerKind,
    pub blockers: Vec<String>,
}

/// Merge blocked components and blocked apps into one feed: components
/// first, then apps, each group in collection order, truncated to `limit`.
pub fn blocker_feed(components: &[Component], apps: &[App], limit: usize) -> Vec<BlockerEntry> {
    let blocked_components = components.iter().filter(|c| c.is_blocked()).map(|c| {
        BlockerEntry {
            id: c.id.clone(),
            name: c.name.clone(),
            kind: BlockerKind::Component,
            blockers: c.blockers.clone(),
        }
    });

    let blocked_apps = apps.iter().filter(|a| a.is_blocked()).map(|a| BlockerEntry {
        id: a.id.clone(),
        name: a.name.clone(),
        kind: BlockerKind::App,
        blockers: a.blockers.clone(),
    });

    blocked_components.chain(blocked_apps).take(limit).collect()
}
