//! config.rs
//! Immutable run configuration, built once by the front end.

use std::path::{Path, PathBuf};

use crate::bootstrap::BootstrapTemplate;
use crate::compression::{CompressionError, CompressionParameters, DecompressionType};
use crate::io::raw_dump_path;
use crate::types::PackError;

/// Everything the in-memory pack needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackOptions {
    pub params: CompressionParameters,
    /// Identifier substituted verbatim into the decompressing bootstrap.
    /// Must name a known container only when `compress` is set.
    pub decompression_type: String,
    /// Run the compressor; otherwise the input is used as-is.
    pub compress: bool,
    /// Use the decompressing bootstrap; otherwise PassThrough.
    pub decompression_script: bool,
}

impl PackOptions {
    pub fn new() -> Self {
        Self {
            params: CompressionParameters::default(),
            decompression_type: DecompressionType::default().to_string(),
            compress: true,
            decompression_script: true,
        }
    }

    pub fn template(&self) -> BootstrapTemplate {
        BootstrapTemplate::select(!self.decompression_script)
    }

    /// Container the compressor has to produce. Only meaningful with
    /// `compress` set; pre-compressed payloads may carry any identifier.
    pub fn container(&self) -> Result<DecompressionType, CompressionError> {
        self.decompression_type.parse()
    }

    pub fn validate(&self) -> Result<(), PackError> {
        if self.decompression_type.is_empty() {
            return Err(PackError::Config("empty decompression type".into()));
        }
        if self.compress {
            self.container()?;
        }
        Ok(())
    }
}

impl Default for PackOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// File-level configuration for one run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackConfig {
    pub payload_path: PathBuf,
    pub html_path: PathBuf,
    pub options: PackOptions,
    pub dump_raw: bool,
    pub write_html: bool,
    pub statistics: bool,
    pub verify: bool,
}

impl PackConfig {
    pub fn new(payload_path: impl Into<PathBuf>, html_path: impl Into<PathBuf>) -> Self {
        Self {
            payload_path: payload_path.into(),
            html_path: html_path.into(),
            options: PackOptions::new(),
            dump_raw: false,
            write_html: true,
            statistics: true,
            verify: false,
        }
    }

    pub fn raw_path(&self) -> PathBuf {
        raw_dump_path(&self.html_path)
    }

    pub fn validate(&self) -> Result<(), PackError> {
        if is_blank(&self.payload_path) {
            return Err(PackError::Config("missing input payload path".into()));
        }
        if is_blank(&self.html_path) {
            return Err(PackError::Config("missing output path".into()));
        }
        self.options.validate()
    }
}

fn is_blank(path: &Path) -> bool {
    path.as_os_str().is_empty()
}
