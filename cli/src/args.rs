//! Command-line surface. Flags are order-independent; exactly two
//! positional paths.

use std::path::PathBuf;

use clap::Parser;
use jspack_core::compression::CompressionParameters;
use jspack_core::config::{PackConfig, PackOptions};
use jspack_core::constants::{DEFAULT_DECOMPRESSION_TYPE, DEFAULT_ZOPFLI_ITERATIONS};
use jspack_core::types::PackError;

#[derive(Parser, Debug)]
#[command(
    name = "jspack",
    version,
    about = "Pack a script into a self-extracting html document",
    long_about = None
)]
pub struct Cli {
    /// Payload to pack (e.g. intro.js)
    pub input: PathBuf,

    /// Output document (e.g. intro.html)
    pub output: PathBuf,

    /// Number of zopfli iterations. More iterations take more time but can
    /// give slightly better compression.
    #[arg(long = "zopfli-iterations", value_name = "N", default_value_t = DEFAULT_ZOPFLI_ITERATIONS)]
    pub zopfli_iterations: u64,

    /// DecompressionStream format. With compression it must be deflate-raw,
    /// deflate or gzip; with --no-compression any identifier is embedded as-is.
    #[arg(long = "decompression-type", value_name = "TYPE", default_value = DEFAULT_DECOMPRESSION_TYPE)]
    pub decompression_type: String,

    /// Do not use block splitting.
    #[arg(long = "no-blocksplitting")]
    pub no_blocksplitting: bool,

    /// Embed the payload uncompressed (pre-compressed input, or testing).
    #[arg(long = "no-compression")]
    pub no_compression: bool,

    /// Use the bootstrap without a decompression stage (testing).
    #[arg(long = "no-decompression-script")]
    pub no_decompression_script: bool,

    /// Also write the payload alone to <OUTPUT>.raw.
    #[arg(long = "dump-compressed-raw")]
    pub dump_compressed_raw: bool,

    /// Do not write the html document (raw dump only).
    #[arg(long = "write-no-html")]
    pub write_no_html: bool,

    /// Do not print size statistics.
    #[arg(long = "no-statistics")]
    pub no_statistics: bool,

    /// Re-parse the assembled document and check it round-trips before writing.
    #[arg(long = "verify")]
    pub verify: bool,
}

impl Cli {
    pub fn into_config(self) -> Result<PackConfig, PackError> {
        let params = CompressionParameters::new(self.zopfli_iterations, !self.no_blocksplitting)?;

        let config = PackConfig {
            payload_path: self.input,
            html_path: self.output,
            options: PackOptions {
                params,
                decompression_type: self.decompression_type,
                compress: !self.no_compression,
                decompression_script: !self.no_decompression_script,
            },
            dump_raw: self.dump_compressed_raw,
            write_html: !self.write_no_html,
            statistics: !self.no_statistics,
            verify: self.verify,
        };
        config.options.validate()?;
        Ok(config)
    }
}
