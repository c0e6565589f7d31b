//! # REST API Module
//!
//! The HTTP surface of the facade: request translation, route dispatch,
//! response/error mapping, and the server shell.

pub mod errors;
pub mod routes;
pub mod server;
pub mod translate;

pub use errors::{ApiError, ApiResult};
pub use routes::router;
pub use server::HttpServer;
pub use translate::FindParams;
