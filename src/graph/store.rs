//! # GraphStore Trait
//!
//! Contract between the HTTP facade and the backing graph store. Handlers
//! hold an `Arc<dyn GraphStore>`; in production that would be a Bolt-backed
//! driver, in tests (and the default `serve` run) it is
//! [`MemoryGraphStore`].
//!
//! [`MemoryGraphStore`]: super::memory::MemoryGraphStore

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use super::entity::EntityKind;
use super::spec::{CreateResult, DeleteResult, Filter, FindOptions, KeySpec, UpdateResult};

/// Result type for graph store operations
pub type GraphResult<T> = Result<T, GraphError>;

/// Errors raised by a graph store
#[derive(Debug, Clone, Error)]
pub enum GraphError {
    /// The backing store cannot be reached or is in a broken state
    #[error("graph store unavailable: {0}")]
    Unavailable(String),

    /// A find option the store cannot execute (NaN/negative/fractional
    /// limit or skip)
    #[error("invalid find option: {0}")]
    InvalidOptions(String),

    /// A payload the schema cannot accept
    #[error("schema violation: {0}")]
    Schema(String),
}

/// The data-access collaborator contract.
///
/// One call per request, no retries, no compensating actions; the store is
/// responsible for being safe under concurrent use.
#[async_trait]
pub trait GraphStore: Send + Sync {
    /// Return entities matching `filter`, ordered and paginated per
    /// `options`
    async fn find(
        &self,
        kind: EntityKind,
        filter: &Filter,
        options: &FindOptions,
    ) -> GraphResult<Vec<Value>>;

    /// Create a batch of entities, assigning identifiers where the schema
    /// requires them
    async fn create(&self, kind: EntityKind, input: Vec<Value>) -> GraphResult<CreateResult>;

    /// Apply `update` to every entity matching `key`; an empty result means
    /// no match
    async fn update(
        &self,
        kind: EntityKind,
        key: &KeySpec,
        update: Value,
    ) -> GraphResult<UpdateResult>;

    /// Delete every entity matching `key`, reporting the count
    async fn delete(&self, kind: EntityKind, key: &KeySpec) -> GraphResult<DeleteResult>;

    /// Startup connectivity check; fails fast when the store is unreachable
    async fn verify_connectivity(&self) -> GraphResult<()>;
}
