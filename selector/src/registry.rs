//! Choose the board registry the page renders.
//!
//! A page may embed `<script type="application/json" id="board-registry">`
//! to replace the compiled-in table. Anything unusable there falls back to
//! [`BoardRegistry::builtin`].

use boards::BoardRegistry;

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

/// Resolve the registry from the page's inline JSON, if any.
pub fn resolve(inline: Option<&str>) -> BoardRegistry {
    let Some(text) = inline.map(str::trim).filter(|t| !t.is_empty()) else {
        return BoardRegistry::builtin();
    };
    match BoardRegistry::from_json(text) {
        Ok(registry) => {
            log::debug!("using inline board registry ({} boards)", registry.len());
            registry
        }
        Err(err) => {
            log::error!("invalid inline board registry, using builtin table: {err}");
            BoardRegistry::builtin()
        }
    }
}
