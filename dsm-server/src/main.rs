use clap::Parser;
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::info;

use dsm_core::FixtureStore;
use dsm_server::config::Config;
use dsm_server::logging::init_logging;
use dsm_server::router::app_router;
use dsm_server::state::AppState;

#[derive(Parser)]
#[command(name = "dsm-server")]
#[command(about = "Read-only dashboard API for the v1 -> v2 component migration")]
#[command(version)]
struct Cli {
    /// Path to the configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override the listen port
    #[arg(long)]
    port: Option<u16>,

    /// Override the fixtures directory
    #[arg(long)]
    fixtures_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize logging
    init_logging();

    let mut config = Config::load(&cli.config)?;
    if let Ok(port) = env::var("PORT") {
        if let Ok(port) = port.parse() {
            config.server.port = port;
        }
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(dir) = cli.fixtures_dir {
        config.fixtures.dir = dir;
    }

    // A store that fails to load is fatal; the process cannot serve
    let store = FixtureStore::load_from_dir(&config.fixtures.dir)?;

    let state = AppState::new(store, config.server.latency_ms);
    let app = app_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("dashboard API listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
