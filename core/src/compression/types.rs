//! compression/types.rs
//! Compression parameters, identifiers, errors and codec traits.

use std::fmt;
use std::str::FromStr;

use crate::constants::DEFAULT_ZOPFLI_ITERATIONS;

/// DecompressionStream format identifiers understood by the host.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum DecompressionType {
    /// Bare DEFLATE stream, no header or trailer.
    #[default]
    DeflateRaw,
    /// DEFLATE wrapped in a zlib header and Adler-32 trailer.
    Deflate,
    /// DEFLATE wrapped in a gzip member.
    Gzip,
}

impl DecompressionType {
    pub const ALL: [DecompressionType; 3] = [
        DecompressionType::DeflateRaw,
        DecompressionType::Deflate,
        DecompressionType::Gzip,
    ];

    /// Exact identifier text as embedded in the bootstrap.
    pub fn as_str(&self) -> &'static str {
        match self {
            DecompressionType::DeflateRaw => "deflate-raw",
            DecompressionType::Deflate    => "deflate",
            DecompressionType::Gzip       => "gzip",
        }
    }
}

impl fmt::Display for DecompressionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for DecompressionType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for DecompressionType {
    type Err = CompressionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DecompressionType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| CompressionError::UnknownDecompressionType { name: s.to_string() })
    }
}

/// Compressor tuning. Governs effort only, never correctness.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CompressionParameters {
    iteration_count: u64,
    block_splitting: bool,
}

impl CompressionParameters {
    pub fn new(iteration_count: u64, block_splitting: bool) -> Result<Self, CompressionError> {
        if iteration_count == 0 {
            return Err(CompressionError::InvalidParameters(
                "iteration count must be at least 1".into(),
            ));
        }
        Ok(Self { iteration_count, block_splitting })
    }

    pub fn iteration_count(&self) -> u64 {
        self.iteration_count
    }

    pub fn block_splitting(&self) -> bool {
        self.block_splitting
    }
}

impl Default for CompressionParameters {
    fn default() -> Self {
        Self { iteration_count: DEFAULT_ZOPFLI_ITERATIONS, block_splitting: true }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CompressionError {
    #[error("unknown decompression type '{name}' (expected deflate-raw, deflate or gzip)")]
    UnknownDecompressionType { name: String },

    #[error("invalid compression parameters: {0}")]
    InvalidParameters(String),

    #[error("codec {codec} produced no output")]
    EmptyOutput { codec: String },

    #[error("codec {codec} process failed: {msg}")]
    CodecProcessFailed { codec: String, msg: String },
}

/// Whole-buffer compressor. One blocking call, no partial results.
pub trait PayloadCompressor {
    /// Short codec name for logs and errors.
    fn name(&self) -> &'static str;

    /// Compress `input` into the container expected by `format`.
    fn compress(
        &self,
        input: &[u8],
        params: &CompressionParameters,
        format: DecompressionType,
    ) -> Result<Vec<u8>, CompressionError>;
}

/// Whole-buffer decoder, used to verify assembled artifacts.
pub trait PayloadDecompressor {
    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>, CompressionError>;
}
