//! # Find/Options/Key Specifications
//!
//! Structured arguments the facade hands to a [`GraphStore`]. The translator
//! produces these; stores interpret them.
//!
//! [`GraphStore`]: super::store::GraphStore

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Filter criteria for a find operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Filter {
    /// Match every entity of the kind
    All,

    /// Case-insensitive substring match against a text field.
    ///
    /// The term is a literal, not a pattern: stores that compile this to a
    /// regex must escape it first.
    ContainsInsensitive { field: String, term: String },
}

impl Filter {
    /// Literal contains filter over a field
    pub fn contains(field: impl Into<String>, term: impl Into<String>) -> Self {
        Filter::ContainsInsensitive {
            field: field.into(),
            term: term.into(),
        }
    }
}

/// A single sort directive, passed through verbatim.
///
/// Direction syntax (`title`, `title_ASC`, `title_DESC`) is owned by the
/// store, not by the translator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortDirective(pub String);

impl SortDirective {
    /// Split a directive into (field, ascending)
    pub fn parts(&self) -> (&str, bool) {
        if let Some(field) = self.0.strip_suffix("_DESC") {
            (field, false)
        } else if let Some(field) = self.0.strip_suffix("_ASC") {
            (field, true)
        } else {
            (self.0.as_str(), true)
        }
    }
}

/// Pagination and ordering directives for a find operation.
///
/// Absent parameters stay `None` and are never defaulted here; the store's
/// own defaults apply. `limit`/`skip` are carried as floats because the
/// translator performs no validation: an unparsable request value arrives as
/// a NaN sentinel for the store to reject.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FindOptions {
    pub sort: Option<Vec<SortDirective>>,
    pub limit: Option<f64>,
    pub skip: Option<f64>,
}

impl FindOptions {
    /// True when no directive is present
    pub fn is_empty(&self) -> bool {
        self.sort.is_none() && self.limit.is_none() && self.skip.is_none()
    }
}

/// The field/value pair identifying a single entity for update/delete
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeySpec {
    pub field: String,
    pub value: String,
}

impl KeySpec {
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Key an entity kind by its identifying field
    pub fn for_kind(kind: super::entity::EntityKind, value: impl Into<String>) -> Self {
        Self::new(kind.key_field(), value)
    }
}

/// Result of a creation batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateResult {
    pub created: Vec<Value>,
}

/// Result of an update: the entities after mutation (empty when no match)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateResult {
    pub updated: Vec<Value>,
}

/// Result of a delete: how many nodes were removed
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DeleteResult {
    pub nodes_deleted: usize,
}
