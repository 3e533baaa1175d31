//! compression/registry.rs
//! Codec registry and factory functions.

use crate::compression::codecs::{deflate, inflate};
use crate::compression::types::{DecompressionType, PayloadCompressor, PayloadDecompressor};

pub struct CodecInfo {
    pub name: &'static str,
    pub container: &'static str,
}

pub fn resolve(kind: DecompressionType) -> CodecInfo {
    match kind {
        DecompressionType::DeflateRaw => CodecInfo { name: kind.as_str(), container: "raw deflate" },
        DecompressionType::Deflate    => CodecInfo { name: kind.as_str(), container: "zlib" },
        DecompressionType::Gzip       => CodecInfo { name: kind.as_str(), container: "gzip" },
    }
}

/// The production compressor.
pub fn create_compressor() -> Box<dyn PayloadCompressor> {
    Box::new(deflate::ZopfliCompressor::new())
}

pub fn create_decompressor(kind: DecompressionType) -> Box<dyn PayloadDecompressor> {
    match kind {
        DecompressionType::DeflateRaw => Box::new(inflate::RawInflate),
        DecompressionType::Deflate    => Box::new(inflate::ZlibInflate),
        DecompressionType::Gzip       => Box::new(inflate::GzipInflate),
    }
}
