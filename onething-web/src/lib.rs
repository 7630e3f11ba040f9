//! HTTP shell for the One Day One Thing site.

pub mod config;
pub mod handlers;
pub mod pages;
pub mod state;

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use state::AppState;

#[must_use]
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
