//! compression/codecs/mod.rs
//! Concrete codecs: zopfli for packing, flate2 for verification.

pub mod inflate;
pub mod deflate;

pub use inflate::*;
pub use deflate::*;
