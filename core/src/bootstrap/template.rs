//! bootstrap/template.rs
//! Registry of the two bootstrap templates.
//!
//! Both templates hang the loader off an `<svg>` element's `onload`;
//! `fetch` of the empty fragment re-reads the document's own bytes.

use crate::bootstrap::resolve::{resolve, RenderedBootstrap};
use crate::bootstrap::BootstrapError;
use crate::constants::placeholders;

const DECOMPRESSING: &str = concat!(
    "<svg onload=\"fetch`#`.then(r=>r.blob()).then(b=>new ",
    "Response(b.slice({offset}).stream().pipeThrough(new ",
    "DecompressionStream('{type}'))).text()).then(eval)\">",
);

// Same loader minus the decompression stage. Testing aid for the slice offset.
const PASS_THROUGH: &str = concat!(
    "<svg onload=\"fetch`#`.then(r=>r.blob()).then(b=>new ",
    "Response(b.slice({offset}).stream()).text()).then(eval)\">",
);

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BootstrapTemplate {
    Decompressing,
    PassThrough,
}

impl BootstrapTemplate {
    pub const ALL: [BootstrapTemplate; 2] =
        [BootstrapTemplate::Decompressing, BootstrapTemplate::PassThrough];

    /// PassThrough iff `skip_decompression`, independent of whether the
    /// payload was compressed.
    pub fn select(skip_decompression: bool) -> Self {
        if skip_decompression {
            BootstrapTemplate::PassThrough
        } else {
            BootstrapTemplate::Decompressing
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            BootstrapTemplate::Decompressing => DECOMPRESSING,
            BootstrapTemplate::PassThrough   => PASS_THROUGH,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BootstrapTemplate::Decompressing => "decompressing",
            BootstrapTemplate::PassThrough   => "pass-through",
        }
    }

    /// Whether the template carries a `{type}` placeholder.
    pub fn takes_decompression_type(&self) -> bool {
        matches!(self, BootstrapTemplate::Decompressing)
    }

    /// Render with a resolved offset. The identifier is substituted
    /// verbatim and ignored by PassThrough.
    pub fn render(&self, identifier: impl AsRef<str>) -> Result<RenderedBootstrap, BootstrapError> {
        let identifier = identifier.as_ref();
        resolve(self.text(), self.takes_decompression_type().then_some(identifier))
    }

    /// Literal pieces around the placeholders.
    pub fn segments(&self) -> Result<TemplateSegments<'static>, BootstrapError> {
        TemplateSegments::split(self.text())
    }
}

/// A template cut at its placeholders: `head {offset} middle {type} tail`.
/// Without a `{type}` placeholder `middle` is `None` and `tail` follows the
/// offset directly.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TemplateSegments<'a> {
    pub head: &'a str,
    pub middle: Option<&'a str>,
    pub tail: &'a str,
}

impl<'a> TemplateSegments<'a> {
    /// Requires the offset placeholder to precede the type placeholder.
    pub fn split(text: &'a str) -> Result<Self, BootstrapError> {
        let (head, rest) = text.split_once(placeholders::OFFSET).ok_or_else(|| {
            BootstrapError::MalformedTemplate { reason: "missing {offset} placeholder".into() }
        })?;
        if head.contains(placeholders::DECOMPRESSION_TYPE) {
            return Err(BootstrapError::MalformedTemplate {
                reason: "{type} must follow {offset}".into(),
            });
        }
        match rest.split_once(placeholders::DECOMPRESSION_TYPE) {
            Some((middle, tail)) => Ok(Self { head, middle: Some(middle), tail }),
            None => Ok(Self { head, middle: None, tail: rest }),
        }
    }
}
