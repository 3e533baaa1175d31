//! compression/mod.rs
//! Payload compression and the matching decoders.
//!
//! Design notes:
//! - The compressor is a black box behind `PayloadCompressor` (zopfli by default).
//! - The container format follows the DecompressionStream identifier, so the
//!   host can always decode what was embedded.
//! - Decoders exist for verification only; the host decompresses at runtime.

pub mod types;
pub mod registry;
pub mod codecs;
pub mod payload;

pub use types::*;
pub use registry::*;
pub use payload::*;
