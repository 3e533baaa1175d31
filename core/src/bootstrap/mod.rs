//! bootstrap/mod.rs
//! The self-describing loader snippet prefixed to every artifact.
//!
//! Design notes:
//! - Two immutable templates live in a registry (`template.rs`).
//! - The offset printed inside the bootstrap equals the bootstrap's own byte
//!   length, which makes rendering a fixed-point problem (`resolve.rs`).
//! - Resolution never assumes a digit count and re-checks the rendered length.

pub mod template;
pub mod resolve;

pub use template::*;
pub use resolve::*;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BootstrapError {
    #[error("malformed bootstrap template: {reason}")]
    MalformedTemplate { reason: String },

    #[error("offset resolution for base length {base} did not converge in {iterations} iterations")]
    NoFixedPoint { base: usize, iterations: usize },

    #[error("rendered bootstrap is {actual} bytes but embeds offset {expected}")]
    InternalConsistency { expected: usize, actual: usize },
}
