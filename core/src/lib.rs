//! jspack-core
//!
//! Packs a script payload into one self-extracting document: a compressed
//! copy of the payload behind a tiny bootstrap that slices itself off,
//! decompresses the rest and evaluates it.
//! No CLI, no process handling.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod utils;
pub mod config;
pub mod io;

pub mod compression;
pub mod bootstrap;
pub mod artifact;
pub mod telemetry;

pub mod pipeline;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::artifact::{assemble, inspect_artifact, verify_artifact, Artifact, ArtifactView};
    pub use crate::bootstrap::{resolve, BootstrapTemplate, RenderedBootstrap};
    pub use crate::compression::{CompressionParameters, DecompressionType, PayloadBytes};
    pub use crate::config::{PackConfig, PackOptions};
    pub use crate::pipeline::{pack_bytes, run, PackOutput};
    pub use crate::types::{ErrorKind, PackError};
}
