//! artifact/verify.rs
//! Post-assembly round-trip check.

use tracing::debug;

use crate::artifact::inspect::{inspect_artifact, ArtifactView};
use crate::artifact::types::ArtifactError;
use crate::bootstrap::BootstrapTemplate;
use crate::compression::{create_decompressor, PayloadBytes, PayloadEncoding};

/// Re-parse `artifact` and check it against what went into it.
///
/// - The parsed payload section must equal `payload` exactly.
/// - A decompressing bootstrap must name the container the payload was
///   compressed into.
/// - A payload compressed by this run must decode back to `original`.
pub fn verify_artifact<'a>(
    artifact: &'a [u8],
    payload: &PayloadBytes,
    original: &[u8],
) -> Result<ArtifactView<'a>, ArtifactError> {
    let view = inspect_artifact(artifact)?;

    if view.payload != payload.as_bytes() {
        return Err(ArtifactError::PayloadMismatch(format!(
            "payload section is {} bytes, expected {} bytes at offset {}",
            view.payload.len(),
            payload.len(),
            view.offset
        )));
    }

    if let PayloadEncoding::Compressed(kind) = payload.encoding() {
        if view.template == BootstrapTemplate::Decompressing
            && view.decompression_type != Some(kind.as_str())
        {
            return Err(ArtifactError::PayloadMismatch(format!(
                "bootstrap decompresses as '{}' but payload is {}",
                view.decompression_type.unwrap_or_default(),
                kind
            )));
        }

        let decoded = create_decompressor(kind).decompress(view.payload)?;
        if decoded != original {
            return Err(ArtifactError::PayloadMismatch(format!(
                "decoded payload is {} bytes, input was {} bytes",
                decoded.len(),
                original.len()
            )));
        }
    }

    debug!(template = view.template.name(), offset = view.offset, "artifact verified");
    Ok(view)
}
