//! Router assembly.

pub mod common;
pub mod items;

pub use common::common_routes;
pub use items::item_routes;

use crate::state::AppState;
use axum::Router;
use tower_http::trace::TraceLayer;

/// The full service: item CRUD plus health/readiness/version, with request tracing.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(item_routes(state.clone()))
        .merge(common_routes(state))
        .layer(TraceLayer::new_for_http())
}
