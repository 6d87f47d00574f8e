//! Error types for the wavemesh library
//!
//! This module defines all error types that can occur while decoding or
//! encoding interchange formats and while validating mesh data.

use thiserror::Error;

/// Error types for mesh operations
#[derive(Error, Debug)]
pub enum MeshError {
    /// Input data does not match the supported format subset
    ///
    /// Returned by the decoders when a recognized line or document fails
    /// numeric parsing (e.g. a face index that is not an integer).
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Mesh structure violates an invariant
    ///
    /// A face references a vertex index outside `[0, vertices.len())`.
    #[error("Invalid mesh: {0}")]
    InvalidMesh(String),

    /// Scene structure violates an invariant
    ///
    /// Two meshes share the same non-empty name, or a contained mesh is
    /// itself invalid.
    #[error("Invalid scene: {0}")]
    InvalidScene(String),

    /// File I/O error
    ///
    /// Wraps standard I/O errors from the underlying stream.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Convenience type alias for Results with [`MeshError`]
pub type Result<T> = std::result::Result<T, MeshError>;
