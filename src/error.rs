//! Error types for export operations.

use thiserror::Error;

/// Errors that can occur while exporting a content state.
#[derive(Error, Debug)]
pub enum Error {
    /// A stop-entity command did not match the entity open at the top of the
    /// stack. This is how crossing entity ranges are detected.
    #[error("invalid entity nesting: expected {expected}, got {found}")]
    InvalidEntity { expected: String, found: String },

    /// An entity key or entity type with no map entry and no `"default"`.
    #[error("unknown entity: {0}")]
    UnknownEntity(String),

    #[error("unknown block type: {0}")]
    UnknownBlockType(String),

    #[error("unknown style: {0}")]
    UnknownStyle(String),

    /// An entity payload is missing a field its decorator requires.
    #[error("missing entity data: {0}")]
    MissingEntityData(String),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
