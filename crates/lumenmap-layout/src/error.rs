//! Error types for layout generation, document parsing, and config loading.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used by the generator.
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Errors surfaced while building or emitting a layout.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// A shape with this name is already registered. Nothing was appended.
    #[error("duplicate shape name `{0}`")]
    DuplicateShapeName(String),

    #[error("failed to encode layout document: {0}")]
    Encode(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Errors surfaced while reading a layout document back in.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to parse layout document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("shape `{0}` not found")]
    UnknownShape(String),

    /// The shape's point block runs past the end of the point array.
    #[error("shape `{name}` spans points {start}..{end} but the document has {available}")]
    ShapeOutOfRange {
        name: String,
        start: usize,
        end: usize,
        available: usize,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Errors surfaced while loading a [`LayoutConfig`](crate::LayoutConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse layout config: {0}")]
    Parse(#[from] serde_json::Error),
}
