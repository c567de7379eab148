//! Pure description of the board option list.
//!
//! The DOM adapter turns a [`SelectorView`] into elements; everything worth
//! asserting about the markup (order, grouping, which option is checked,
//! which labels carry a description) is decided here.

use boards::BoardRegistry;

use crate::consts::GROUP_NAME;

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

/// One selectable board option.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionView {
    /// Board id, used as the radio value.
    pub value: String,
    /// Radio group name; identical for every option.
    pub group: &'static str,
    pub checked: bool,
    pub icon: String,
    pub name: String,
    /// `None` when the board has an empty description.
    pub description: Option<String>,
}

/// The full option list, in registry order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectorView {
    pub options: Vec<OptionView>,
}

impl SelectorView {
    /// Describe the options for `registry` with `selected` checked.
    ///
    /// An id not in the registry (or `None`) leaves every option unchecked.
    #[must_use]
    pub fn build(registry: &BoardRegistry, selected: Option<&str>) -> Self {
        let options = registry
            .iter()
            .map(|board| OptionView {
                value: board.id.clone(),
                group: GROUP_NAME,
                checked: selected == Some(board.id.as_str()),
                icon: board.icon.clone(),
                name: board.name.clone(),
                description: if board.description.is_empty() { None } else { Some(board.description.clone()) },
            })
            .collect();
        Self { options }
    }

    /// The checked option, if any.
    #[must_use]
    pub fn checked(&self) -> Option<&OptionView> {
        self.options.iter().find(|o| o.checked)
    }

    #[must_use]
    pub fn checked_count(&self) -> usize {
        self.options.iter().filter(|o| o.checked).count()
    }
}
