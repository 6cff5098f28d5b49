use std::sync::Arc;

use axum::{routing::get, Router};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::prices::PriceService;

use super::handlers;
use super::middleware::{track_metrics, CorrelationIdLayer};

#[derive(Clone)]
pub struct AppState {
    pub prices: Arc<PriceService>,
    pub metrics_handle: PrometheusHandle,
}

async fn metrics_handler(
    axum::extract::State(state): axum::extract::State<AppState>,
) -> String {
    state.metrics_handle.render()
}

pub fn create_router(prices: Arc<PriceService>, metrics_handle: PrometheusHandle) -> Router {
    let state = AppState {
        prices,
        metrics_handle,
    };

    let api_routes = Router::new()
        .route("/prices", get(handlers::get_prices))
        .route("/zones/{country}", get(handlers::get_country_zones))
        .route("/countries", get(handlers::list_countries))
        .route("/countries/{country}", get(handlers::get_country))
        .route("/registry", get(handlers::export_registry));

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/metrics", get(metrics_handler))
        .nest("/api", api_routes)
        .layer(CorrelationIdLayer)
        .layer(axum::middleware::from_fn(track_metrics))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
