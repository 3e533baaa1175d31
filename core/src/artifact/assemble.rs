//! artifact/assemble.rs
//! Byte-exact concatenation of bootstrap and payload.

use tracing::debug;

use crate::artifact::types::Artifact;
use crate::bootstrap::RenderedBootstrap;
use crate::compression::PayloadBytes;

/// Concatenate without transforming either side. Cannot fail.
pub fn assemble(bootstrap: &RenderedBootstrap, payload: &PayloadBytes) -> Artifact {
    let offset = bootstrap.offset();
    let mut bytes = Vec::with_capacity(offset + payload.len());
    bytes.extend_from_slice(bootstrap.as_bytes());
    bytes.extend_from_slice(payload.as_bytes());

    debug_assert_eq!(bytes.len(), offset + payload.len());
    debug!(offset, payload = payload.len(), total = bytes.len(), "artifact assembled");

    Artifact { bytes, offset }
}
