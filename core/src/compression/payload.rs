//! compression/payload.rs
//! The compress-or-pass-through decision.
//!
//! Summary: either run the compressor once or hand the input through
//! untouched. Downstream stages treat both results identically.

use tracing::debug;

use crate::compression::types::{
    CompressionError, CompressionParameters, DecompressionType, PayloadCompressor,
};

/// How the payload bytes relate to the original input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PayloadEncoding {
    /// Input used as-is.
    Raw,
    /// Compressed by this run into the container of the given identifier.
    Compressed(DecompressionType),
}

/// Bytes placed after the bootstrap. Never modified once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PayloadBytes {
    bytes: Vec<u8>,
    encoding: PayloadEncoding,
}

impl PayloadBytes {
    pub fn raw(bytes: Vec<u8>) -> Self {
        Self { bytes, encoding: PayloadEncoding::Raw }
    }

    pub fn compressed(bytes: Vec<u8>, kind: DecompressionType) -> Self {
        Self { bytes, encoding: PayloadEncoding::Compressed(kind) }
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

    pub fn encoding(&self) -> PayloadEncoding {
        self.encoding
    }

    pub fn is_compressed(&self) -> bool {
        matches!(self.encoding, PayloadEncoding::Compressed(_))
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Compress `input` unless `compress` is false. No retry on failure.
pub fn prepare_payload(
    input: &[u8],
    compress: bool,
    compressor: &dyn PayloadCompressor,
    params: &CompressionParameters,
    kind: DecompressionType,
) -> Result<PayloadBytes, CompressionError> {
    if !compress {
        debug!(bytes = input.len(), "compression skipped, payload used as-is");
        return Ok(PayloadBytes::raw(input.to_vec()));
    }

    let out = compressor.compress(input, params, kind)?;
    if out.is_empty() {
        return Err(CompressionError::EmptyOutput { codec: compressor.name().into() });
    }

    debug!(
        codec = compressor.name(),
        format = %kind,
        iterations = params.iteration_count(),
        block_splitting = params.block_splitting(),
        input = input.len(),
        output = out.len(),
        "payload compressed"
    );
    Ok(PayloadBytes::compressed(out, kind))
}
