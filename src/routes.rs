//! HTTP router: the WebSocket endpoint plus static client assets.

use axum::Router;
use axum::routing::get;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the application router. `static_dir` holds the built browser
/// client; everything that is not `/ws` falls through to it.
pub fn app(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/ws", get(crate::ws::ws_handler))
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
