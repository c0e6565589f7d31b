//! # Graph Store Module
//!
//! The data-access seam of the facade. HTTP handlers speak to the graph
//! through the [`GraphStore`] trait; the trait owns querying, identity
//! assignment, and persistence. [`MemoryGraphStore`] is the in-process
//! implementation backing the server and the test suite.

pub mod entity;
pub mod memory;
pub mod spec;
pub mod store;

pub use entity::EntityKind;
pub use memory::MemoryGraphStore;
pub use spec::{CreateResult, DeleteResult, Filter, FindOptions, KeySpec, SortDirective, UpdateResult};
pub use store::{GraphError, GraphResult, GraphStore};
