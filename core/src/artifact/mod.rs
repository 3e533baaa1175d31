//! artifact/mod.rs
//! `[rendered bootstrap][payload]` documents.
//!
//! Design notes:
//! - No header, checksum or version tag; the numeral inside the bootstrap is
//!   the only length field.
//! - Inspection re-renders the recognised template and compares it byte for
//!   byte, so a parsed offset is always self-consistent.

pub mod types;
pub mod assemble;
pub mod inspect;
pub mod verify;

pub use types::*;
pub use assemble::*;
pub use inspect::*;
pub use verify::*;
