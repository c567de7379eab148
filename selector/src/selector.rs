//! Board selection state and installer dispatch.
//!
//! [`BoardSelector`] holds everything that doesn't depend on the browser so
//! it can be tested natively. The DOM adapter owns one behind an
//! `Rc<RefCell<_>>` and forwards radio `change` events to
//! [`BoardSelector::on_select`].

use boards::{BoardRegistry, manifest_path};

use crate::view::SelectorView;

#[cfg(test)]
#[path = "selector_test.rs"]
mod selector_test;

/// The external install widget the selector configures.
///
/// The selector never reads from it; it only points it at a manifest and
/// makes it visible.
pub trait InstallerTarget {
    /// Set the manifest resource the installer will fetch.
    fn set_manifest(&mut self, path: &str);
    /// Make the installer visible. Calling it again has no further effect.
    fn reveal(&mut self);
}

/// Which board is active.
///
/// Once [`BoardSelector::render`] has run the state is always `Selected`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Unselected,
    Selected(String),
}

/// Error returned by [`BoardSelector::on_select`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectError {
    #[error("unknown board id: {0}")]
    UnknownBoard(String),
}

pub struct BoardSelector<T> {
    registry: BoardRegistry,
    installer: T,
    selection: Selection,
}

impl<T: InstallerTarget> BoardSelector<T> {
    #[must_use]
    pub fn new(registry: BoardRegistry, installer: T) -> Self {
        Self { registry, installer, selection: Selection::Unselected }
    }

    /// Activate the first board, configure the installer for it, and describe
    /// the option list to draw.
    ///
    /// The installer is configured before this returns, so it is never shown
    /// without a manifest.
    pub fn render(&mut self) -> SelectorView {
        let first = self.registry.first().id.clone();
        self.apply(first);
        self.view()
    }

    /// Draw the option list with `draw`, then activate the first board.
    ///
    /// `draw` sees the list before anything is checked. The first board is
    /// activated whether or not `draw` succeeds, so the installer is
    /// configured either way; the draw error is returned afterwards.
    ///
    /// # Errors
    ///
    /// Returns whatever `draw` returned.
    pub fn mount<R, E>(&mut self, draw: impl FnOnce(&SelectorView) -> Result<R, E>) -> Result<(R, SelectorView), E> {
        let drawn = draw(&self.view());
        let view = self.render();
        drawn.map(|r| (r, view))
    }

    /// Handle a selection change to `id`, returning the manifest path now set
    /// on the installer.
    ///
    /// Re-selecting the active board writes the same manifest again and keeps
    /// the installer visible.
    ///
    /// # Errors
    ///
    /// Returns [`SelectError::UnknownBoard`] if `id` is not in the registry;
    /// the selection and installer are left untouched.
    pub fn on_select(&mut self, id: &str) -> Result<String, SelectError> {
        if !self.registry.contains(id) {
            return Err(SelectError::UnknownBoard(id.to_owned()));
        }
        Ok(self.apply(id.to_owned()))
    }

    fn apply(&mut self, id: String) -> String {
        let manifest = manifest_path(&id);
        self.installer.set_manifest(&manifest);
        self.installer.reveal();
        log::info!("Selected board: {id}, manifest: {manifest}");
        self.selection = Selection::Selected(id);
        manifest
    }

    /// Current option list with the active board checked.
    #[must_use]
    pub fn view(&self) -> SelectorView {
        SelectorView::build(&self.registry, self.selected_id())
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub fn selected_id(&self) -> Option<&str> {
        match &self.selection {
            Selection::Selected(id) => Some(id),
            Selection::Unselected => None,
        }
    }

    #[must_use]
    pub fn registry(&self) -> &BoardRegistry {
        &self.registry
    }

    #[must_use]
    pub fn installer(&self) -> &T {
        &self.installer
    }
}
