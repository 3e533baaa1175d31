//! bootstrap/resolve.rs
//! Fixed-point resolution of the self-referential offset.
//!
//! Summary: the bootstrap embeds its own length `k` as a decimal numeral, so
//! `k = base + digits(k)` where `base` is everything except the numeral.
//!
//! Design notes:
//! - Works on arbitrary template text, not only the registry constants.
//! - Iterates from `k = base`; the sequence is non-decreasing and settles on
//!   the smallest fixed point, in at most three steps for realistic sizes.
//! - The rendered text is measured again before it is returned.

use tracing::debug;

use crate::bootstrap::BootstrapError;
use crate::constants::{placeholders, MAX_RESOLVE_ITERATIONS};
use crate::utils::decimal_digits;

/// Result of the offset search.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FixedPoint {
    pub offset: usize,
    pub iterations: usize,
}

/// A template with both placeholders substituted.
/// Invariant: `offset() == as_bytes().len()`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedBootstrap {
    text: String,
    iterations: usize,
}

impl RenderedBootstrap {
    /// Byte offset of the payload, which is also the embedded numeral.
    pub fn offset(&self) -> usize {
        self.text.len()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Fixed-point iterations spent resolving the offset.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

/// Length of `template` with every placeholder removed, plus the identifier.
///
/// # Errors
/// - `MalformedTemplate` unless `{offset}` occurs exactly once.
/// - `MalformedTemplate` if `{type}` occurs more than once, or its presence
///   does not match whether `decompression_type` is given.
pub fn base_length(template: &str, decompression_type: Option<&str>) -> Result<usize, BootstrapError> {
    let offsets = template.matches(placeholders::OFFSET).count();
    if offsets != 1 {
        return Err(BootstrapError::MalformedTemplate {
            reason: format!("expected exactly one {} placeholder, found {}", placeholders::OFFSET, offsets),
        });
    }

    let types = template.matches(placeholders::DECOMPRESSION_TYPE).count();
    let expected_types = usize::from(decompression_type.is_some());
    if types != expected_types {
        return Err(BootstrapError::MalformedTemplate {
            reason: format!(
                "expected {} {} placeholder(s), found {}",
                expected_types,
                placeholders::DECOMPRESSION_TYPE,
                types
            ),
        });
    }

    let literal = template.len()
        - placeholders::OFFSET.len()
        - types * placeholders::DECOMPRESSION_TYPE.len();
    Ok(literal + decompression_type.map_or(0, str::len))
}

/// Smallest `k >= base` with `k == base + digits(k)`.
pub fn fixed_point(base: usize) -> Result<FixedPoint, BootstrapError> {
    fixed_point_from(base, base)
}

/// Same search, seeded with `seed`. Seeding with a resolved offset returns
/// it again after a single iteration.
pub fn fixed_point_from(base: usize, seed: usize) -> Result<FixedPoint, BootstrapError> {
    let mut k = seed;
    for iteration in 1..=MAX_RESOLVE_ITERATIONS {
        let n = base
            .checked_add(decimal_digits(k))
            .ok_or(BootstrapError::NoFixedPoint { base, iterations: iteration })?;
        if n == k {
            return Ok(FixedPoint { offset: k, iterations: iteration });
        }
        k = n;
    }
    Err(BootstrapError::NoFixedPoint { base, iterations: MAX_RESOLVE_ITERATIONS })
}

/// Resolve the offset and render `template`.
///
/// # Errors
/// - `MalformedTemplate` for bad placeholder counts (see [`base_length`]).
/// - `InternalConsistency` if the rendered length differs from the offset it
///   embeds. Never returned for well-formed templates.
pub fn resolve(template: &str, decompression_type: Option<&str>) -> Result<RenderedBootstrap, BootstrapError> {
    let base = base_length(template, decompression_type)?;
    let FixedPoint { offset, iterations } = fixed_point(base)?;

    let text = render_text(template, offset, decompression_type.unwrap_or_default());
    if text.len() != offset {
        return Err(BootstrapError::InternalConsistency { expected: offset, actual: text.len() });
    }

    debug!(base, offset, iterations, "bootstrap offset resolved");
    Ok(RenderedBootstrap { text, iterations })
}

#[derive(Copy, Clone)]
enum Placeholder {
    Offset,
    DecompressionType,
}

impl Placeholder {
    fn token(self) -> &'static str {
        match self {
            Placeholder::Offset            => placeholders::OFFSET,
            Placeholder::DecompressionType => placeholders::DECOMPRESSION_TYPE,
        }
    }
}

fn next_placeholder(s: &str) -> Option<(usize, Placeholder)> {
    let offset = s.find(placeholders::OFFSET).map(|at| (at, Placeholder::Offset));
    let kind = s.find(placeholders::DECOMPRESSION_TYPE).map(|at| (at, Placeholder::DecompressionType));
    match (offset, kind) {
        (Some(a), Some(b)) => Some(if a.0 <= b.0 { a } else { b }),
        (a, b) => a.or(b),
    }
}

// Single left-to-right pass so substituted values are never rescanned.
fn render_text(template: &str, offset: usize, decompression_type: &str) -> String {
    let mut out = String::with_capacity(offset);
    let mut rest = template;
    while let Some((at, placeholder)) = next_placeholder(rest) {
        out.push_str(&rest[..at]);
        match placeholder {
            Placeholder::Offset            => out.push_str(&offset.to_string()),
            Placeholder::DecompressionType => out.push_str(decompression_type),
        }
        rest = &rest[at + placeholder.token().len()..];
    }
    out.push_str(rest);
    out
}
