//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The flasher is a static page: `index.html`, the compiled selector bundle
//! under `pkg/`, and one `manifest_<id>.json` per board plus the firmware
//! images they reference. All of it is served from `FLASHER_DIR`. The
//! dynamic routes are a health check, the board list, and (when the registry
//! comes from `BOARDS_FILE`) `index.html` with that registry embedded.

pub mod boards;
pub mod page;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/boards", get(boards::list_boards))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// `index.html` with the registry embedded, or nothing when the page should
/// use its compiled-in table.
fn page_routes(state: AppState) -> Router {
    if !state.embed_registry {
        return Router::new();
    }
    Router::new()
        .route("/", get(page::index))
        .route("/index.html", get(page::index))
        .with_state(state)
}

/// Full application router: API routes plus the flasher directory at `/`.
pub fn app(state: AppState) -> Router {
    let site = ServeDir::new(state.flasher_dir.as_path()).append_index_html_on_directories(true);

    api_routes(state.clone())
        .merge(page_routes(state))
        .fallback_service(site)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
