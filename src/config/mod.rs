//! # Configuration
//!
//! Environment configuration read once at process start:
//!
//! | Variable         | Default                  |
//! |------------------|--------------------------|
//! | `NEO4J_URI`      | `bolt://localhost:7687`  |
//! | `NEO4J_USER`     | `admin`                  |
//! | `NEO4J_PASSWORD` | `password`               |
//! | `HTTP_PORT`      | `4000`                   |
//!
//! The bolt settings describe the backing graph store a driver
//! implementation would dial; the facade itself only carries them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors, all fatal at startup
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("invalid HTTP_PORT value: '{0}'")]
    InvalidPort(String),
}

/// Process configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Bolt URI of the backing graph store
    #[serde(default = "default_bolt_uri")]
    pub bolt_uri: String,

    /// Graph store username
    #[serde(default = "default_bolt_user")]
    pub bolt_user: String,

    /// Graph store password
    #[serde(default = "default_bolt_password")]
    pub bolt_password: String,

    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP listen port (default: 4000)
    #[serde(default = "default_http_port")]
    pub http_port: u16,
}

fn default_bolt_uri() -> String {
    "bolt://localhost:7687".to_string()
}

fn default_bolt_user() -> String {
    "admin".to_string()
}

fn default_bolt_password() -> String {
    "password".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_http_port() -> u16 {
    4000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bolt_uri: default_bolt_uri(),
            bolt_user: default_bolt_user(),
            bolt_password: default_bolt_password(),
            host: default_host(),
            http_port: default_http_port(),
        }
    }
}

impl Config {
    /// Load configuration from the environment, falling back to defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Ok(uri) = std::env::var("NEO4J_URI") {
            config.bolt_uri = uri;
        }
        if let Ok(user) = std::env::var("NEO4J_USER") {
            config.bolt_user = user;
        }
        if let Ok(password) = std::env::var("NEO4J_PASSWORD") {
            config.bolt_password = password;
        }
        if let Ok(port) = std::env::var("HTTP_PORT") {
            config.http_port = port.parse().map_err(|_| ConfigError::InvalidPort(port))?;
        }

        Ok(config)
    }

    /// Override the listen port
    pub fn with_port(mut self, port: u16) -> Self {
        self.http_port = port;
        self
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }
}
