use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub fixtures: FixturesConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,
    /// Simulated per-request latency for exercising loading states in the
    /// consuming UI. 0 disables the delay.
    pub latency_ms: u64,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct FixturesConfig {
    pub dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            fixtures: FixturesConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 4000,
            latency_ms: 0,
        }
    }
}

impl Default for FixturesConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("fixtures"),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file. A missing file falls back to
    /// the defaults; a file that exists but cannot be parsed is an error.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file '{}'", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("failed to parse config file '{}'", path.display()))?;
        Ok(config)
    }
}
