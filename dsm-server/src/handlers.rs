use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Json};
use serde_json::json;
use tracing::{debug, warn};

use dsm_core::aggregate;
use dsm_core::query::{self, PageParams, DEFAULT_PAGE_LIMIT};
use dsm_core::resolve;

use crate::error::ApiError;
use crate::models::{
    AppDetail, AppListQuery, AppSummary, BlockersQuery, ComponentDetail, ComponentListQuery,
    ComponentSummary, Paginated,
};
use crate::state::AppState;

/// Default and maximum number of entries in the blockers feed. The cap is
/// applied regardless of what the client asks for.
const DEFAULT_BLOCKERS_LIMIT: usize = 10;
const MAX_BLOCKERS_LIMIT: usize = 50;

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "service": "dsm-server",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// GET /api/stats
pub async fn get_stats(State(state): State<AppState>) -> impl IntoResponse {
    state.simulate_latency().await;
    Json(aggregate::migration_stats(&state.store))
}

/// GET /api/blockers
pub async fn list_blockers(
    State(state): State<AppState>,
    Query(params): Query<BlockersQuery>,
) -> impl IntoResponse {
    state.simulate_latency().await;

    let limit = query::parse_param(params.limit.as_deref(), DEFAULT_BLOCKERS_LIMIT)
        .min(MAX_BLOCKERS_LIMIT);
    let feed = aggregate::blocker_feed(state.store.components(), state.store.apps(), limit);
    Json(feed)
}

/// GET /api/burndown
pub async fn get_burndown(State(state): State<AppState>) -> impl IntoResponse {
    state.simulate_latency().await;
    Json(state.store.burndown().to_vec())
}

/// GET /api/components
pub async fn list_components(
    State(state): State<AppState>,
    Query(params): Query<ComponentListQuery>,
) -> impl IntoResponse {
    state.simulate_latency().await;

    let page_params = PageParams::from_query(
        params.page.as_deref(),
        params.limit.as_deref(),
        DEFAULT_PAGE_LIMIT,
    );
    // An unknown status value matches nothing rather than failing
    let status = params.status;
    let page = query::paginate(
        state.store.components(),
        |c| status.as_deref().map_or(true, |s| c.status.as_str() == s),
        page_params,
    );

    let data: Vec<ComponentSummary> = page.items.iter().map(|c| (*c).into()).collect();
    Json(Paginated {
        data,
        pagination: page.pagination,
    })
}

/// GET /api/components/:id
pub async fn get_component(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ComponentDetail>, ApiError> {
    state.simulate_latency().await;

    let component = state.store.component_by_id(&id).ok_or_else(|| {
        warn!(component_id = %id, "component lookup failed");
        ApiError::ComponentNotFound
    })?;

    let used_by = resolve::used_by(state.store.apps(), &id);
    debug!(component_id = %id, used_by = used_by.len(), "resolved component detail");

    Ok(Json(ComponentDetail {
        component: component.clone(),
        used_by,
    }))
}

/// GET /api/apps
pub async fn list_apps(
    State(state): State<AppState>,
    Query(params): Query<AppListQuery>,
) -> impl IntoResponse {
    state.simulate_latency().await;

    let page_params = PageParams::from_query(
        params.page.as_deref(),
        params.limit.as_deref(),
        DEFAULT_PAGE_LIMIT,
    );
    let team = params.team;
    // Only the literal string "true" activates the blocker filter
    let only_blocked = params.has_blockers.as_deref() == Some("true");

    let page = query::paginate(
        state.store.apps(),
        |a| {
            let team_matches = team
                .as_deref()
                .map_or(true, |t| a.team.to_lowercase() == t.to_lowercase());
            team_matches && (!only_blocked || a.is_blocked())
        },
        page_params,
    );

    let data: Vec<AppSummary> = page.items.iter().map(|a| (*a).into()).collect();
    Json(Paginated {
        data,
        pagination: page.pagination,
    })
}

/// GET /api/apps/:id
pub async fn get_app(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<AppDetail>, ApiError> {
    state.simulate_latency().await;

    let app = state.store.app_by_id(&id).ok_or_else(|| {
        warn!(app_id = %id, "app lookup failed");
        ApiError::AppNotFound
    })?;

    let component_usage = resolve::resolve_usage(state.store.components(), app);

    Ok(Json(AppDetail {
        id: app.id.clone(),
        name: app.name.clone(),
        team: app.team.clone(),
        ds_version: app.ds_version.clone(),
        migration_progress: app.migration_progress,
        blockers: app.blockers.clone(),
        component_usage,
    }))
}

/// GET /api/teams
pub async fn list_teams(State(state): State<AppState>) -> impl IntoResponse {
    state.simulate_latency().await;
    Json(state.store.teams().to_vec())
}
