//! Flasher page with the board registry inlined.
//!
//! The selector reads `<script type="application/json" id="board-registry">`
//! before falling back to its compiled-in table, so a registry loaded from
//! `BOARDS_FILE` only reaches the page through this handler.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;

use crate::state::AppState;

/// Element id the selector looks up.
pub const REGISTRY_SCRIPT_ID: &str = "board-registry";

/// Insert the registry script just before `</body>`, or at the end if the
/// page has no closing body tag.
#[must_use]
pub fn inject_registry(html: &str, registry_json: &str) -> String {
    // `</` inside a script body would close the element early.
    let script = format!(
        r#"<script type="application/json" id="{REGISTRY_SCRIPT_ID}">{}</script>"#,
        registry_json.replace("</", "<\\/")
    );
    match html.rfind("</body>") {
        Some(at) => format!("{}{script}\n{}", &html[..at], &html[at..]),
        None => format!("{html}{script}"),
    }
}

/// `GET /` and `GET /index.html` when the registry is embedded.
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
    let path = state.flasher_dir.join("index.html");
    let html = tokio::fs::read_to_string(&path).await.map_err(|e| {
        tracing::warn!(error = %e, path = %path.display(), "flasher index.html unavailable");
        StatusCode::NOT_FOUND
    })?;
    Ok(Html(inject_registry(&html, &state.registry.to_json())))
}

#[cfg(test)]
#[path = "page_test.rs"]
mod tests;
