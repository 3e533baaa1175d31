//! DEFLATE via zopfli. Exhaustive search, slow but small output.

use std::num::NonZeroU64;

use zopfli::{Format, Options};

use crate::compression::types::{
    CompressionError, CompressionParameters, DecompressionType, PayloadCompressor,
};
use crate::constants::{BLOCK_SPLITS_DEFAULT, BLOCK_SPLITS_DISABLED};

#[derive(Debug, Default, Clone, Copy)]
pub struct ZopfliCompressor;

impl ZopfliCompressor {
    pub fn new() -> Self {
        Self
    }

    fn options(params: &CompressionParameters) -> Result<Options, CompressionError> {
        let iteration_count = NonZeroU64::new(params.iteration_count()).ok_or_else(|| {
            CompressionError::InvalidParameters("iteration count must be at least 1".into())
        })?;

        let mut options = Options::default();
        options.iteration_count = iteration_count;
        options.maximum_block_splits = if params.block_splitting() {
            BLOCK_SPLITS_DEFAULT
        } else {
            BLOCK_SPLITS_DISABLED
        };
        Ok(options)
    }
}

fn container(kind: DecompressionType) -> Format {
    match kind {
        DecompressionType::DeflateRaw => Format::Deflate,
        DecompressionType::Deflate    => Format::Zlib,
        DecompressionType::Gzip       => Format::Gzip,
    }
}

impl PayloadCompressor for ZopfliCompressor {
    fn name(&self) -> &'static str {
        "zopfli"
    }

    fn compress(
        &self,
        input: &[u8],
        params: &CompressionParameters,
        format: DecompressionType,
    ) -> Result<Vec<u8>, CompressionError> {
        let options = Self::options(params)?;

        let mut out = Vec::new();
        zopfli::compress(options, container(format), input, &mut out).map_err(|e| {
            CompressionError::CodecProcessFailed { codec: self.name().into(), msg: e.to_string() }
        })?;

        if out.is_empty() {
            return Err(CompressionError::EmptyOutput { codec: self.name().into() });
        }
        Ok(out)
    }
}
