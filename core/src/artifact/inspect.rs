//! artifact/inspect.rs
//! Parse an artifact back into its parts.
//!
//! Summary: recognise the bootstrap by its literal segments, read the offset
//! numeral, extract the identifier, then re-render the template and require
//! an exact match with `bytes[..offset]`.

use crate::artifact::types::ArtifactError;
use crate::bootstrap::{resolve, BootstrapTemplate, TemplateSegments};
use crate::compression::{create_decompressor, DecompressionType};

/// Borrowed view over a parsed artifact.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ArtifactView<'a> {
    pub template: BootstrapTemplate,
    pub offset: usize,
    /// Identifier text as embedded; `None` for PassThrough.
    pub decompression_type: Option<&'a str>,
    pub bootstrap: &'a [u8],
    pub payload: &'a [u8],
}

impl<'a> ArtifactView<'a> {
    /// What the host ends up evaluating: the payload, decoded with the
    /// embedded identifier when the bootstrap decompresses.
    pub fn decode(&self) -> Result<Vec<u8>, ArtifactError> {
        match self.decompression_type {
            None => Ok(self.payload.to_vec()),
            Some(name) => {
                let kind: DecompressionType = name.parse()?;
                Ok(create_decompressor(kind).decompress(self.payload)?)
            }
        }
    }
}

pub fn inspect_artifact(bytes: &[u8]) -> Result<ArtifactView<'_>, ArtifactError> {
    for template in BootstrapTemplate::ALL {
        let segments = template.segments()?;
        if !bytes.starts_with(segments.head.as_bytes()) {
            continue;
        }

        let offset = read_offset(&bytes[segments.head.len()..])?;
        if offset > bytes.len() {
            return Err(ArtifactError::OffsetOutOfRange { offset, len: bytes.len() });
        }
        let bootstrap = &bytes[..offset];

        let Some(decompression_type) = match_segments(bootstrap, &segments) else {
            continue;
        };

        let rendered = resolve(template.text(), decompression_type)?;
        if rendered.as_bytes() != bootstrap {
            return Err(ArtifactError::BootstrapMismatch { template: template.name() });
        }

        return Ok(ArtifactView {
            template,
            offset,
            decompression_type,
            bootstrap,
            payload: &bytes[offset..],
        });
    }
    Err(ArtifactError::UnrecognizedBootstrap)
}

fn read_offset(after_head: &[u8]) -> Result<usize, ArtifactError> {
    let digits = after_head.iter().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return Err(ArtifactError::MissingOffset);
    }
    // ASCII digits only, so both conversions hold unless the value overflows.
    std::str::from_utf8(&after_head[..digits])
        .ok()
        .and_then(|s| s.parse().ok())
        .ok_or(ArtifactError::MissingOffset)
}

// `Some(identifier)` when `bootstrap` has this template's shape. The outer
// option is the match, the inner one the identifier.
fn match_segments<'a>(
    bootstrap: &'a [u8],
    segments: &TemplateSegments<'_>,
) -> Option<Option<&'a str>> {
    let head = segments.head.len();
    let digits = bootstrap.get(head..)?.iter().take_while(|b| b.is_ascii_digit()).count();
    let rest = &bootstrap[head + digits..];

    match segments.middle {
        None => (rest == segments.tail.as_bytes()).then_some(None),
        Some(middle) => {
            let inner = rest.strip_prefix(middle.as_bytes())?;
            let identifier = inner.strip_suffix(segments.tail.as_bytes())?;
            std::str::from_utf8(identifier).ok().map(Some)
        }
    }
}
