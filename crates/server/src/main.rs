use std::{net::SocketAddr, sync::Arc};

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use server_api::{fetch_data, update_data, ApiContext};
use sheets::SheetsClient;
use shared::{
    domain::Record,
    error::ApiError,
    protocol::{
        FetchDataQuery, UpdateDataRequest, UpdateDataResponse, FETCH_DATA_ROUTE,
        UPDATE_DATA_ROUTE,
    },
};
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing::{info, warn};

mod app_state;
mod config;

use app_state::AppState;
use config::load_settings;

const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ApiError>)>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let settings = load_settings();
    let store = Arc::new(SheetsClient::new(settings.sheets_config()));
    let api = ApiContext::new(store, settings.default_sheet_id.clone());
    let app = build_router(Arc::new(AppState { api }));

    let addr: SocketAddr = settings.server_bind.parse()?;
    info!(%addr, "server listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route(FETCH_DATA_ROUTE, get(http_fetch_data))
        .route(UPDATE_DATA_ROUTE, post(http_update_data))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn http_fetch_data(
    State(state): State<Arc<AppState>>,
    Query(q): Query<FetchDataQuery>,
) -> ApiResult<Vec<Record>> {
    let records = fetch_data(&state.api, q.sheet_id.as_deref())
        .await
        .map_err(internal)?;
    Ok(Json(records))
}

async fn http_update_data(
    State(state): State<Arc<AppState>>,
    body: Result<Json<UpdateDataRequest>, JsonRejection>,
) -> ApiResult<UpdateDataResponse> {
    let Json(req) = body.map_err(|rejection| {
        warn!(error = %rejection.body_text(), "rejected update body");
        internal(ApiError::update_failed())
    })?;
    let resp = update_data(&state.api, req).await.map_err(internal)?;
    Ok(Json(resp))
}

fn internal(err: ApiError) -> (StatusCode, Json<ApiError>) {
    (StatusCode::INTERNAL_SERVER_ERROR, Json(err))
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
