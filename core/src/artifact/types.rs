//! artifact/types.rs

use crate::bootstrap::BootstrapError;
use crate::compression::CompressionError;

/// Final document bytes plus the payload offset they embed.
/// Invariant: `bytes[..offset]` is the bootstrap, `bytes[offset..]` the payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Artifact {
    pub(crate) bytes: Vec<u8>,
    pub(crate) offset: usize,
}

impl Artifact {
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn bootstrap(&self) -> &[u8] {
        &self.bytes[..self.offset]
    }

    pub fn payload(&self) -> &[u8] {
        &self.bytes[self.offset..]
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("artifact does not start with a known bootstrap")]
    UnrecognizedBootstrap,

    #[error("bootstrap carries no offset numeral")]
    MissingOffset,

    #[error("embedded offset {offset} exceeds artifact length {len}")]
    OffsetOutOfRange { offset: usize, len: usize },

    #[error("{template} bootstrap does not match its re-rendered form")]
    BootstrapMismatch { template: &'static str },

    #[error("payload mismatch: {0}")]
    PayloadMismatch(String),

    #[error(transparent)]
    Bootstrap(#[from] BootstrapError),

    #[error("payload does not decode")]
    Decode(#[from] CompressionError),
}
