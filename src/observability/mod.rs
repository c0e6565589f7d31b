//! # Observability
//!
//! Structured logging for the facade: one JSON line per event, explicit
//! severity, deterministic key ordering.

pub mod logger;

pub use logger::{Logger, Severity};
