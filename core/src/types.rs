use std::io;
use std::path::PathBuf;

use crate::{
    artifact::ArtifactError,
    bootstrap::BootstrapError,
    compression::CompressionError,
};

/// Coarse error classes. Every `PackError` maps to exactly one.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing or invalid paths, flag values or identifiers; empty input.
    Configuration,
    /// Open, read or write failure.
    Io,
    /// The compressor failed or produced nothing.
    Compression,
    /// A defect: the bootstrap or artifact contradicts itself.
    InternalConsistency,
}

/// Unified pack error.
/// - `From<T>` impls enable `?` across the pipeline.
/// - I/O errors carry the path and the action that failed; the cause is
///   reachable through `source()` only.
#[derive(Debug, thiserror::Error)]
pub enum PackError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("failed to {action} {}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Compression(#[from] CompressionError),

    #[error(transparent)]
    Bootstrap(#[from] BootstrapError),

    #[error("artifact verification failed")]
    Verification(#[from] ArtifactError),
}

impl PackError {
    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        PackError::Io { action, path: path.into(), source }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            PackError::Config(_) => ErrorKind::Configuration,
            PackError::Io { .. } => ErrorKind::Io,
            PackError::Compression(
                CompressionError::UnknownDecompressionType { .. }
                | CompressionError::InvalidParameters(_),
            ) => ErrorKind::Configuration,
            PackError::Compression(_) => ErrorKind::Compression,
            PackError::Bootstrap(_) | PackError::Verification(_) => ErrorKind::InternalConsistency,
        }
    }
}
