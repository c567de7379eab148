//! Shared application state.
//!
//! `AppState` is injected into Axum handlers via the `State` extractor. It is
//! read-only after startup.

use std::path::PathBuf;
use std::sync::Arc;

use boards::BoardRegistry;

#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<BoardRegistry>,
    pub flasher_dir: Arc<PathBuf>,
    /// Serve `index.html` with `registry` inlined for the selector.
    pub embed_registry: bool,
}

impl AppState {
    #[must_use]
    pub fn new(registry: BoardRegistry, flasher_dir: PathBuf) -> Self {
        Self { registry: Arc::new(registry), flasher_dir: Arc::new(flasher_dir), embed_registry: false }
    }

    /// Inline the registry into the served page.
    #[must_use]
    pub fn embedding_registry(mut self) -> Self {
        self.embed_registry = true;
        self
    }
}
