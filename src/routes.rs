use std::any::Any;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};
use tracing::error;

use crate::handlers;
use crate::languages::LanguageRegistry;
use crate::page;
use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/translate", post(handlers::translate))
        .route("/detect", post(handlers::detect))
        .route("/health", get(handlers::health_check))
        .fallback(handlers::not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Uncaught faults: log the detail, answer with the page and a 500.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    error!("Internal server error: {}", detail);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Html(page::render_index(LanguageRegistry::get())),
    )
        .into_response()
}
