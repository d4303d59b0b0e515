//! tableproof Core - Shared Data Types
//!
//! Already-fetched UI data in the shapes the verification helpers consume.
//! Nothing here performs I/O; the helper crates borrow these types and report
//! mismatches as [`VerifyError`].

use serde::{Deserialize, Serialize};

mod config;
mod error;
mod graph;
mod score;

pub use config::{VerifyConfig, CONFIG_ENV};
pub use error::{ConfigError, VerifyError, VerifyResult};
pub use graph::Graph;
pub use score::{Score, SortedSetEntry};

// ============================================================================
// ROWS
// ============================================================================

/// One rendered table row.
///
/// The first raw cell belongs to the selector (checkbox) column and never holds
/// data. Logical column `k` lives at raw position `k + 1`; only this type
/// applies that offset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    cells: Vec<String>,
}

impl Row {
    /// Number of leading UI-only cells in every row.
    pub const SELECTOR_COLUMNS: usize = 1;

    /// Wrap raw cells, selector cell included.
    pub fn new(cells: Vec<String>) -> Self {
        Self { cells }
    }

    /// Build a row from logical cells, prepending an empty selector cell.
    pub fn from_columns<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let cells = std::iter::once(String::new())
            .chain(columns.into_iter().map(Into::into))
            .collect();
        Self { cells }
    }

    /// Logical column `index`, or `None` past the end of the row.
    pub fn column(&self, index: usize) -> Option<&str> {
        self.cells
            .get(index + Self::SELECTOR_COLUMNS)
            .map(String::as_str)
    }

    /// Logical cells in order, selector skipped.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells
            .iter()
            .skip(Self::SELECTOR_COLUMNS)
            .map(String::as_str)
    }

    pub fn raw(&self) -> &[String] {
        &self.cells
    }

    /// Number of logical columns.
    pub fn len(&self) -> usize {
        self.cells.len().saturating_sub(Self::SELECTOR_COLUMNS)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Vec<String>> for Row {
    fn from(cells: Vec<String>) -> Self {
        Self::new(cells)
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for Row {
    fn from(cells: [S; N]) -> Self {
        cells.into_iter().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for Row {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

// ============================================================================
// FIELDS
// ============================================================================

/// A displayed name/value pair, e.g. one line of a metadata panel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub value: String,
}

impl Field {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Ordered field pairs. Names may repeat, so this is not a map.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fields(Vec<Field>);

impl Fields {
    pub fn new(fields: Vec<Field>) -> Self {
        Self(fields)
    }

    /// Value of the first field called `name`.
    pub fn find(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }

    pub fn has(&self, name: &str) -> bool {
        self.0.iter().any(|f| f.name == name)
    }

    /// Whether any field carries one of `names`.
    pub fn has_any<S: AsRef<str>>(&self, names: &[S]) -> bool {
        names.iter().any(|name| self.has(name.as_ref()))
    }

    /// Whether one single entry has both this name and this value.
    pub fn contains(&self, name: &str, value: &str) -> bool {
        self.0.iter().any(|f| f.name == name && f.value == value)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Field> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Field>> for Fields {
    fn from(fields: Vec<Field>) -> Self {
        Self(fields)
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for Fields {
    fn from_iter<T: IntoIterator<Item = (N, V)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(n, v)| Field::new(n, v)).collect())
    }
}

impl<'a> IntoIterator for &'a Fields {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// ============================================================================
// SCRATCHPAD OUTPUT
// ============================================================================

/// Result grid of an ad hoc query run in the scratchpad.
///
/// Each row ends with UI-action cells that are not query data.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScratchpadOutput {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ScratchpadOutput {
    /// Rows with the trailing `action_columns` cells removed.
    pub fn data_rows(&self, action_columns: usize) -> impl Iterator<Item = &[String]> {
        self.rows
            .iter()
            .map(move |row| &row[..row.len().saturating_sub(action_columns)])
    }
}

// ============================================================================
// KEY TYPES
// ============================================================================

/// Redis-style key type as named by the key-value browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyType {
    Hash,
    List,
    Set,
    ZSet,
    String,
}

impl KeyType {
    /// Parse a type name. Anything unrecognized is treated as a string key.
    pub fn from_name(name: &str) -> Self {
        match name {
            "hash" => KeyType::Hash,
            "list" => KeyType::List,
            "set" => KeyType::Set,
            "zset" => KeyType::ZSet,
            _ => KeyType::String,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            KeyType::Hash => "hash",
            KeyType::List => "list",
            KeyType::Set => "set",
            KeyType::ZSet => "zset",
            KeyType::String => "string",
        }
    }

    /// Column headers the browser renders for this key type, selector first.
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            KeyType::Hash => &["", "field", "value"],
            KeyType::List | KeyType::Set => &["", "index", "value"],
            KeyType::ZSet => &["", "index", "member", "score"],
            KeyType::String => &["", "value"],
        }
    }
}

// ============================================================================
// NODE METADATA
// ============================================================================

/// What a table/collection metadata panel is expected to show.
///
/// Unset expectations are not checked. An empty type name counts as unset.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NodeMetadata {
    #[serde(rename = "type", default)]
    pub type_name: Option<String>,
    #[serde(default)]
    pub has_size: bool,
    #[serde(default)]
    pub has_count: bool,
}

impl NodeMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_type(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    pub fn with_size(mut self) -> Self {
        self.has_size = true;
        self
    }

    pub fn with_count(mut self) -> Self {
        self.has_count = true;
        self
    }

    /// The expected type, if one was actually requested.
    pub fn expected_type(&self) -> Option<&str> {
        self.type_name.as_deref().filter(|t| !t.is_empty())
    }
}

// =============================================================================
// TESTS
// =============================================================================


// ============================================================================
// PROPERTY-BASED TESTS
// ============================================================================
