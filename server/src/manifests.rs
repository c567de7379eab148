//! Manifest presence check.
//!
//! Every board needs a `manifest_<id>.json` next to the flasher page or the
//! install button has nothing to fetch. Only existence is checked; manifest
//! contents belong to ESP Web Tools.

use std::path::Path;

use boards::BoardRegistry;

/// Ids of boards whose manifest file is missing from `dir`, in registry order.
#[must_use]
pub fn missing_manifests(dir: &Path, registry: &BoardRegistry) -> Vec<String> {
    registry
        .iter()
        .filter(|board| !dir.join(board.manifest_path()).is_file())
        .map(|board| board.id.clone())
        .collect()
}

/// Log one warning per missing manifest. Returns how many were missing.
pub fn warn_missing(dir: &Path, registry: &BoardRegistry) -> usize {
    let missing = missing_manifests(dir, registry);
    for id in &missing {
        tracing::warn!(
            board = %id,
            manifest = %boards::manifest_path(id),
            dir = %dir.display(),
            "manifest missing from flasher directory"
        );
    }
    missing.len()
}

#[cfg(test)]
#[path = "manifests_test.rs"]
mod tests;
