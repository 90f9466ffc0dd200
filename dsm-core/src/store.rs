use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::domain::{App, BurndownPoint, Component, Team};
use crate::error::{DsmError, Result};

/// Read-only collections backing every endpoint, loaded once at startup.
///
/// The store is constructed explicitly and handed to request handlers, so
/// tests can build one from synthetic fixtures instead of the shared files.
pub struct FixtureStore {
    components: Vec<Component>,
    apps: Vec<App>,
    teams: Vec<Team>,
    burndown: Vec<BurndownPoint>,
}

impl FixtureStore {
    pub fn new(
        components: Vec<Component>,
        apps: Vec<App>,
        teams: Vec<Team>,
        burndown: Vec<BurndownPoint>,
    ) -> Self {
        Self {
            components,
            apps,
            teams,
            burndown,
        }
    }

    /// Load all fixture collections from a directory.
    ///
    /// Any missing or malformed file is an error; the caller treats that as
    /// fatal since the process cannot serve without its data.
    pub fn load_from_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        if !dir.exists() {
            return Err(DsmError::Fixture(format!(
                "fixtures directory does not exist: {}",
                dir.display()
            )));
        }

        let components: Vec<Component> = load_collection(&dir.join("components.json"))?;
        let apps: Vec<App> = load_collection(&dir.join("apps.json"))?;
        let teams: Vec<Team> = load_collection(&dir.join("teams.json"))?;
        let burndown: Vec<BurndownPoint> = load_collection(&dir.join("burndown.json"))?;

        info!(
            components = components.len(),
            apps = apps.len(),
            teams = teams.len(),
            burndown = burndown.len(),
            "loaded fixtures from {}",
            dir.display()
        );

        Ok(Self::new(components, apps, teams, burndown))
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn apps(&self) -> &[App] {
        &self.apps
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn burndown(&self) -> &[BurndownPoint] {
        &self.burndown
    }

    pub fn component_by_id(&self, id: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.id == id)
    }

    pub fn app_by_id(&self, id: &str) -> Option<&App> {
        self.apps.iter().find(|a| a.id == id)
    }
}

fn load_collection<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let content = fs::read_to_string(path).map_err(|e| {
        DsmError::Fixture(format!(
            "failed to read fixture file {}: {}",
            path.display(),
            e
        ))
    })?;

    serde_json::from_str(&content).map_err(|e| {
        DsmError::Fixture(format!(
            "failed to parse fixture file {}: {}",
            path.display(),
            e
        ))
    })
}
