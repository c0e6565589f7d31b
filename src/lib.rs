//! cinegraph - HTTP CRUD facade over a movie/genre graph store
//!
//! The HTTP layer translates query parameters and JSON bodies into
//! structured graph operations; querying, identity assignment, and
//! persistence live behind the [`graph::GraphStore`] trait.

pub mod cli;
pub mod config;
pub mod graph;
pub mod observability;
pub mod rest_api;
