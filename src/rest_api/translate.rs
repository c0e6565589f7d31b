//! # Request Translator
//!
//! Pure conversion of raw query parameters and JSON bodies into the
//! structured arguments a [`GraphStore`] expects. Total for any input: no
//! validation happens here, unparsable numerics pass through as a NaN
//! sentinel for the store to reject.
//!
//! [`GraphStore`]: crate::graph::GraphStore

use serde::Deserialize;
use serde_json::Value;

use crate::graph::{EntityKind, Filter, FindOptions, SortDirective};

use super::errors::{ApiError, ApiResult};

/// Raw find-request query parameters, all optional.
///
/// `limit` and `skip` stay strings at this level; coercion is part of
/// translation, not extraction.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FindParams {
    pub search: Option<String>,
    pub sort: Option<String>,
    pub limit: Option<String>,
    pub skip: Option<String>,
}

/// Translate find parameters into a (filter, options) pair.
///
/// Empty-string parameters count as absent. Absent parameters are omitted
/// from the options, never defaulted; the store's own defaults apply.
pub fn find_spec(kind: EntityKind, params: &FindParams) -> (Filter, FindOptions) {
    let filter = match present(&params.search) {
        Some(term) => Filter::contains(kind.search_field(), term),
        None => Filter::All,
    };

    let options = FindOptions {
        sort: present(&params.sort).map(split_sort),
        limit: present(&params.limit).map(parse_count),
        skip: present(&params.skip).map(parse_count),
    };

    (filter, options)
}

/// Extract the nested entity payload (`movie`/`genre`) from a request body
pub fn entity_payload(kind: EntityKind, body: &Value) -> ApiResult<Value> {
    body.get(kind.payload_field())
        .cloned()
        .ok_or(ApiError::MissingPayload(kind.payload_field()))
}

/// Treat empty strings as absent parameters
fn present(param: &Option<String>) -> Option<&str> {
    param.as_deref().filter(|s| !s.is_empty())
}

/// Split a comma-separated sort parameter into directives, passed through
/// verbatim; direction syntax is owned by the store
fn split_sort(raw: &str) -> Vec<SortDirective> {
    raw.split(',').map(|s| SortDirective(s.to_string())).collect()
}

/// Coerce a numeric parameter, yielding NaN when it does not parse
fn parse_count(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(f64::NAN)
}
