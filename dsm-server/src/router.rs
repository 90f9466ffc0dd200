use axum::http::Method;
use axum::routing::get;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use crate::handlers::{
    get_app, get_burndown, get_component, get_stats, health, list_apps, list_blockers,
    list_components, list_teams,
};
use crate::state::AppState;

pub fn app_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/api/stats", get(get_stats))
        .route("/api/blockers", get(list_blockers))
        .route("/api/burndown", get(get_burndown))
        .route("/api/components", get(list_components))
        .route("/api/components/:id", get(get_component))
        .route("/api/apps", get(list_apps))
        .route("/api/apps/:id", get(get_app))
        .route("/api/teams", get(list_teams))
        .layer(ServiceBuilder::new().layer(cors))
        .with_state(state)
}
