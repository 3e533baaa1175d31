//! flate2 decoders for the three DecompressionStream formats.

use std::io::Read;

use flate2::read::{DeflateDecoder, GzDecoder, ZlibDecoder};

use crate::compression::types::{CompressionError, PayloadDecompressor};

fn read_all<R: Read>(mut dec: R, codec: &str) -> Result<Vec<u8>, CompressionError> {
    let mut decompressed = Vec::new();
    dec.read_to_end(&mut decompressed)
        .map_err(|e| CompressionError::CodecProcessFailed { codec: codec.into(), msg: e.to_string() })?;
    Ok(decompressed)
}

/// `deflate-raw`
pub struct RawInflate;

impl PayloadDecompressor for RawInflate {
    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>, CompressionError> {
        read_all(DeflateDecoder::new(input), "deflate-raw")
    }
}

/// `deflate` (zlib container)
pub struct ZlibInflate;

impl PayloadDecompressor for ZlibInflate {
    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>, CompressionError> {
        read_all(ZlibDecoder::new(input), "deflate")
    }
}

/// `gzip`
pub struct GzipInflate;

impl PayloadDecompressor for GzipInflate {
    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>, CompressionError> {
        read_all(GzDecoder::new(input), "gzip")
    }
}
