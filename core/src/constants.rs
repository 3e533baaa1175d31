//! constants.rs
//! Defaults and fixed tokens shared by the core and the CLI.

/// Default zopfli iteration count (compressor effort).
pub const DEFAULT_ZOPFLI_ITERATIONS: u64 = 50;

/// Default identifier substituted into the decompressing bootstrap.
pub const DEFAULT_DECOMPRESSION_TYPE: &str = "deflate-raw";

/// Suffix appended to the html path for the raw side-channel dump.
pub const RAW_DUMP_SUFFIX: &str = ".raw";

/// Placeholder tokens inside bootstrap templates.
pub mod placeholders {
    /// Replaced by the decimal byte offset of the payload.
    pub const OFFSET: &str = "{offset}";
    /// Replaced by the DecompressionStream format identifier.
    pub const DECOMPRESSION_TYPE: &str = "{type}";
}

/// Upper bound on fixed-point iterations before the resolver gives up.
/// Real templates converge in two or three.
pub const MAX_RESOLVE_ITERATIONS: usize = 16;

/// zopfli block split caps.
/// - `1` keeps the whole input in a single block (no splitting).
/// - `15` is zopfli's own default.
pub const BLOCK_SPLITS_DISABLED: u16 = 1;
pub const BLOCK_SPLITS_DEFAULT: u16 = 15;
