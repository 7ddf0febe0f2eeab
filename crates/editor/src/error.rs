//! Error types for editor commands and project persistence.

use shared::PartId;
use thiserror::Error;

/// Errors surfaced by editor commands and project stores.
///
/// None of these leave the editor in a partially applied state; every
/// failure can be recovered from by retrying the command.
#[derive(Debug, Error)]
pub enum EditorError {
    /// Tag passed to the part factory is not in the part vocabulary.
    #[error("invalid part type '{0}'")]
    InvalidPartType(String),

    /// Command referenced a part that is not in the collection.
    #[error("part not found: {0}")]
    PartNotFound(PartId),

    /// A part with this id is already in the collection.
    #[error("duplicate part id: {0}")]
    DuplicateId(PartId),

    /// User input rejected before any state was touched.
    #[error("validation error: {0}")]
    Validation(String),

    /// Project store I/O failed.
    #[error("persistence failure: {0}")]
    Persistence(String),

    /// Transform value that cannot be written to JSON.
    #[error("part {part_id} has a non-finite {field}")]
    NonFinite {
        part_id: PartId,
        field: &'static str,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl EditorError {
    pub fn persistence(msg: impl std::fmt::Display) -> Self {
        EditorError::Persistence(msg.to_string())
    }
}

impl From<shared::UnknownPartType> for EditorError {
    fn from(err: shared::UnknownPartType) -> Self {
        EditorError::InvalidPartType(err.0)
    }
}

impl From<reqwest::Error> for EditorError {
    fn from(err: reqwest::Error) -> Self {
        EditorError::Persistence(err.to_string())
    }
}

impl From<std::io::Error> for EditorError {
    fn from(err: std::io::Error) -> Self {
        EditorError::Persistence(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, EditorError>;
