//! # In-Memory Graph Store
//!
//! Honors every clause of the [`GraphStore`] contract against process-local
//! state. Backs the test suite and the default `serve` run; a Bolt-backed
//! driver would slot behind the same trait.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use regex::{Regex, RegexBuilder};
use serde_json::Value;
use uuid::Uuid;

use super::entity::EntityKind;
use super::spec::{CreateResult, DeleteResult, Filter, FindOptions, KeySpec, UpdateResult};
use super::store::{GraphError, GraphResult, GraphStore};

/// In-process graph store; safe for concurrent use by overlapping requests
pub struct MemoryGraphStore {
    /// Entity kind -> stored entities
    data: RwLock<HashMap<EntityKind, Vec<Value>>>,
}

impl MemoryGraphStore {
    pub fn new() -> Self {
        Self {
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Compile a filter into an optional (field, matcher) pair.
    ///
    /// The search term is escaped before compilation: metacharacters in the
    /// request match literally.
    fn compile_filter(filter: &Filter) -> GraphResult<Option<(String, Regex)>> {
        match filter {
            Filter::All => Ok(None),
            Filter::ContainsInsensitive { field, term } => {
                let matcher = RegexBuilder::new(&regex::escape(term))
                    .case_insensitive(true)
                    .build()
                    .map_err(|e| GraphError::InvalidOptions(e.to_string()))?;
                Ok(Some((field.clone(), matcher)))
            }
        }
    }

    /// Convert a pagination value to an index, rejecting the translator's
    /// NaN sentinel along with negative and fractional values
    fn to_index(value: f64, name: &str) -> GraphResult<usize> {
        if !value.is_finite() || value < 0.0 || value.fract() != 0.0 {
            return Err(GraphError::InvalidOptions(format!(
                "{} must be a non-negative integer, got {}",
                name, value
            )));
        }
        Ok(value as usize)
    }

    /// Sort in place per the directives (numbers, then strings; unknown
    /// fields compare equal)
    fn apply_ordering(records: &mut [Value], options: &FindOptions) {
        let Some(directives) = &options.sort else {
            return;
        };

        records.sort_by(|a, b| {
            for directive in directives {
                let (field, ascending) = directive.parts();
                let cmp = match (a.get(field), b.get(field)) {
                    (Some(Value::Number(a)), Some(Value::Number(b))) => {
                        let a = a.as_f64().unwrap_or(0.0);
                        let b = b.as_f64().unwrap_or(0.0);
                        a.partial_cmp(&b).unwrap_or(Ordering::Equal)
                    }
                    (Some(Value::String(a)), Some(Value::String(b))) => a.cmp(b),
                    _ => Ordering::Equal,
                };

                let cmp = if ascending { cmp } else { cmp.reverse() };
                if cmp != Ordering::Equal {
                    return cmp;
                }
            }
            Ordering::Equal
        });
    }

    /// Apply skip then limit
    fn apply_pagination(records: Vec<Value>, options: &FindOptions) -> GraphResult<Vec<Value>> {
        let skip = match options.skip {
            Some(raw) => Self::to_index(raw, "skip")?,
            None => 0,
        };
        let limit = match options.limit {
            Some(raw) => Some(Self::to_index(raw, "limit")?),
            None => None,
        };

        let iter = records.into_iter().skip(skip);
        Ok(match limit {
            Some(n) => iter.take(n).collect(),
            None => iter.collect(),
        })
    }

    fn key_matches(record: &Value, key: &KeySpec) -> bool {
        record.get(&key.field).and_then(Value::as_str) == Some(key.value.as_str())
    }
}

impl Default for MemoryGraphStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GraphStore for MemoryGraphStore {
    async fn find(
        &self,
        kind: EntityKind,
        filter: &Filter,
        options: &FindOptions,
    ) -> GraphResult<Vec<Value>> {
        let matcher = Self::compile_filter(filter)?;

        let data = self
            .data
            .read()
            .map_err(|_| GraphError::Unavailable("lock poisoned".to_string()))?;

        let mut records: Vec<Value> = data
            .get(&kind)
            .map(|records| {
                records
                    .iter()
                    .filter(|r| match &matcher {
                        None => true,
                        Some((field, re)) => r
                            .get(field)
                            .and_then(Value::as_str)
                            .is_some_and(|text| re.is_match(text)),
                    })
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        Self::apply_ordering(&mut records, options);
        Self::apply_pagination(records, options)
    }

    async fn create(&self, kind: EntityKind, input: Vec<Value>) -> GraphResult<CreateResult> {
        let mut created = Vec::with_capacity(input.len());

        for mut entity in input {
            let Some(fields) = entity.as_object_mut() else {
                return Err(GraphError::Schema(format!(
                    "{} payload must be an object",
                    kind.label()
                )));
            };

            // The store owns identity: Movies get a movieId at creation
            if kind == EntityKind::Movie && !fields.contains_key("movieId") {
                fields.insert(
                    "movieId".to_string(),
                    Value::String(Uuid::new_v4().to_string()),
                );
            }

            created.push(entity);
        }

        let mut data = self
            .data
            .write()
            .map_err(|_| GraphError::Unavailable("lock poisoned".to_string()))?;

        data.entry(kind).or_default().extend(created.iter().cloned());

        Ok(CreateResult { created })
    }

    async fn update(
        &self,
        kind: EntityKind,
        key: &KeySpec,
        update: Value,
    ) -> GraphResult<UpdateResult> {
        let Some(update_fields) = update.as_object() else {
            return Err(GraphError::Schema(format!(
                "{} update payload must be an object",
                kind.label()
            )));
        };

        let mut data = self
            .data
            .write()
            .map_err(|_| GraphError::Unavailable("lock poisoned".to_string()))?;

        let mut updated = Vec::new();
        if let Some(records) = data.get_mut(&kind) {
            for record in records.iter_mut().filter(|r| Self::key_matches(r, key)) {
                if let Some(fields) = record.as_object_mut() {
                    for (name, value) in update_fields {
                        fields.insert(name.clone(), value.clone());
                    }
                }
                updated.push(record.clone());
            }
        }

        Ok(UpdateResult { updated })
    }

    async fn delete(&self, kind: EntityKind, key: &KeySpec) -> GraphResult<DeleteResult> {
        let mut data = self
            .data
            .write()
            .map_err(|_| GraphError::Unavailable("lock poisoned".to_string()))?;

        let mut nodes_deleted = 0;
        if let Some(records) = data.get_mut(&kind) {
            let before = records.len();
            records.retain(|r| !Self::key_matches(r, key));
            nodes_deleted = before - records.len();
        }

        Ok(DeleteResult { nodes_deleted })
    }

    async fn verify_connectivity(&self) -> GraphResult<()> {
        self.data
            .read()
            .map(|_| ())
            .map_err(|_| GraphError::Unavailable("lock poisoned".to_string()))
    }
}
