use std::sync::Arc;
use std::time::Duration;

use dsm_core::FixtureStore;

/// Shared, read-only state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<FixtureStore>,
    latency: Option<Duration>,
}

impl AppState {
    pub fn new(store: FixtureStore, latency_ms: u64) -> Self {
        Self {
            store: Arc::new(store),
            latency: (latency_ms > 0).then(|| Duration::from_millis(latency_ms)),
        }
    }

    /// Optional simulated network delay before a handler does its work.
    pub async fn simulate_latency(&self) {
        if let Some(delay) = self.latency {
            tokio::time::sleep(delay).await;
        }
    }
}
