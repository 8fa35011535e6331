use std::path::PathBuf;

use loupe_object::{ObjectId, ParseError};

/// Errors from loose object store operations.
///
/// Nothing here is recovered internally; each variant aborts the current
/// decode call and surfaces typed, so callers can tell "object missing"
/// from "object corrupt".
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The resolved path does not exist (bad or unknown identifier).
    #[error("object not found: {0}")]
    NotFound(ObjectId),

    /// The bytes at the path are not a valid zlib stream.
    #[error("decompression failed for {id}: {reason}")]
    Decompression { id: ObjectId, reason: String },

    /// The decompressed bytes are not a valid envelope.
    #[error(transparent)]
    Malformed(#[from] ParseError),

    /// The ref file does not exist.
    #[error("ref file not found: {0}")]
    RefNotFound(PathBuf),

    /// The ref file does not contain a usable identifier.
    #[error("invalid ref file {path}: {reason}")]
    InvalidRef { path: PathBuf, reason: String },

    /// I/O error from the underlying filesystem.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
