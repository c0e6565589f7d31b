//! # Entity Kinds
//!
//! The two schema types exposed by the facade, plus the field-name policy
//! the translator and store agree on.

use serde::{Deserialize, Serialize};

/// Entity kinds known to the graph schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// A movie node: movieId, title, imdbRating, genres
    #[serde(rename = "movie")]
    Movie,

    /// A genre node: name (natural key)
    #[serde(rename = "genre")]
    Genre,
}

impl EntityKind {
    /// Node label in the graph schema
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Movie => "Movie",
            EntityKind::Genre => "Genre",
        }
    }

    /// Primary text field targeted by `search`
    pub fn search_field(&self) -> &'static str {
        match self {
            EntityKind::Movie => "title",
            EntityKind::Genre => "name",
        }
    }

    /// Field identifying a single entity for update/delete
    pub fn key_field(&self) -> &'static str {
        match self {
            EntityKind::Movie => "movieId",
            EntityKind::Genre => "name",
        }
    }

    /// Name of the nested request-body field carrying the entity payload
    pub fn payload_field(&self) -> &'static str {
        match self {
            EntityKind::Movie => "movie",
            EntityKind::Genre => "genre",
        }
    }
}
