//! Board registry shared by the browser selector and the flasher server.
//!
//! A registry is an ordered, immutable list of supported hardware boards.
//! Order matters: the first board is the one the selector activates by
//! default. Each board maps to exactly one manifest resource named by
//! [`manifest_path`], which the deployment must place next to the flasher
//! page.

use std::fmt;

use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value, json};

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;

/// Prefix of every manifest resource name.
pub const MANIFEST_PREFIX: &str = "manifest_";
/// Suffix of every manifest resource name.
pub const MANIFEST_SUFFIX: &str = ".json";

/// Error returned when building or loading a [`BoardRegistry`].
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// The registry has no boards.
    #[error("board registry is empty")]
    Empty,
    /// A board id is empty or whitespace.
    #[error("board id must not be blank")]
    BlankId,
    /// Two boards share the same id.
    #[error("duplicate board id: {0}")]
    DuplicateId(String),
    /// The configuration text is not valid JSON or a board entry is malformed.
    #[error("failed to parse board registry: {0}")]
    Parse(#[from] serde_json::Error),
    /// The top-level JSON value is not an object keyed by board id.
    #[error("board registry must be a JSON object keyed by board id")]
    NotAnObject,
}

/// A supported hardware target and its display metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub id: String,
    pub name: String,
    pub icon: String,
    /// Empty when the board has no description line.
    #[serde(default)]
    pub description: String,
}

impl Board {
    pub fn new(id: impl Into<String>, name: impl Into<String>, icon: impl Into<String>, description: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into(), icon: icon.into(), description: description.into() }
    }

    /// Manifest resource for this board.
    #[must_use]
    pub fn manifest_path(&self) -> String {
        manifest_path(&self.id)
    }
}

/// Metadata half of a board as it appears in a configuration file, where the
/// id is the object key.
#[derive(Deserialize)]
struct BoardEntry {
    name: String,
    icon: String,
    #[serde(default)]
    description: String,
}

/// Every `(id, entry)` pair of a configuration object, in document order.
///
/// Collected through a map visitor rather than `serde_json::Map` so repeated
/// keys survive to [`BoardRegistry::new`].
struct Entries(Vec<(String, BoardEntry)>);

impl<'de> Deserialize<'de> for Entries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(EntriesVisitor)
    }
}

struct EntriesVisitor;

impl<'de> Visitor<'de> for EntriesVisitor {
    type Value = Entries;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object keyed by board id")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Entries, A::Error> {
        let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((id, entry)) = map.next_entry::<String, BoardEntry>()? {
            entries.push((id, entry));
        }
        Ok(Entries(entries))
    }
}

/// Ordered, non-empty set of boards with unique ids.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardRegistry {
    boards: Vec<Board>,
}

impl BoardRegistry {
    /// Build a registry, keeping the given order.
    ///
    /// # Errors
    ///
    /// Returns an error if `boards` is empty, an id is blank, or an id repeats.
    pub fn new(boards: Vec<Board>) -> Result<Self, RegistryError> {
        if boards.is_empty() {
            return Err(RegistryError::Empty);
        }
        for (i, board) in boards.iter().enumerate() {
            if board.id.trim().is_empty() {
                return Err(RegistryError::BlankId);
            }
            if boards[..i].iter().any(|b| b.id == board.id) {
                return Err(RegistryError::DuplicateId(board.id.clone()));
            }
        }
        Ok(Self { boards })
    }

    /// The compiled-in board table.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            boards: vec![
                Board::new("esp32_dev", "ESP32 DevKit V1", "📟", "Standard ESP32 development board"),
                Board::new("esp32s3_dev", "ESP32-S3 DevKit", "⚡", "ESP32-S3 with USB OTG and more RAM"),
            ],
        }
    }

    /// Parse a registry from a JSON object keyed by board id.
    ///
    /// ```json
    /// { "esp32_dev": { "name": "ESP32 DevKit V1", "icon": "📟", "description": "..." } }
    /// ```
    ///
    /// Key order in the text is the registry order.
    ///
    /// # Errors
    ///
    /// Returns an error for invalid JSON, a non-object document, malformed
    /// entries, or any error from [`BoardRegistry::new`].
    pub fn from_json(text: &str) -> Result<Self, RegistryError> {
        if !text.trim_start().starts_with('{') {
            serde_json::from_str::<IgnoredAny>(text)?;
            return Err(RegistryError::NotAnObject);
        }
        let Entries(entries) = serde_json::from_str(text)?;
        let boards = entries
            .into_iter()
            .map(|(id, entry)| Board { id, name: entry.name, icon: entry.icon, description: entry.description })
            .collect();
        Self::new(boards)
    }

    /// Serialize to the object form [`BoardRegistry::from_json`] reads, keys in
    /// registry order.
    #[must_use]
    pub fn to_json(&self) -> String {
        let entries: Map<String, Value> = self
            .boards
            .iter()
            .map(|b| (b.id.clone(), json!({ "name": b.name, "icon": b.icon, "description": b.description })))
            .collect();
        Value::Object(entries).to_string()
    }

    /// The default-selected board.
    #[must_use]
    pub fn first(&self) -> &Board {
        &self.boards[0]
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Board> {
        self.boards.iter().find(|b| b.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Board> {
        self.boards.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.boards.iter().map(|b| b.id.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    /// Never true for a validated registry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Board] {
        &self.boards
    }
}

impl Default for BoardRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> IntoIterator for &'a BoardRegistry {
    type Item = &'a Board;
    type IntoIter = std::slice::Iter<'a, Board>;

    fn into_iter(self) -> Self::IntoIter {
        self.boards.iter()
    }
}

/// Manifest resource name for a board id: `manifest_<id>.json`.
#[must_use]
pub fn manifest_path(id: &str) -> String {
    format!("{MANIFEST_PREFIX}{id}{MANIFEST_SUFFIX}")
}
