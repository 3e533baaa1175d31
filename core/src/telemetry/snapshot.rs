//! telemetry/snapshot.rs
//!
//! Immutable run summary and the human-readable size report.
//!
//! Design notes:
//! - `PackSnapshot` is built once, after every output has been written.
//! - `SizeReport` renders one block per written file, html first.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use crate::bootstrap::BootstrapTemplate;
use crate::telemetry::timers::{Stage, StageTimes, TelemetryTimer};
use crate::utils::percent_of;

#[derive(Debug, Clone, PartialEq)]
pub struct PackSnapshot {
    pub bytes_input: u64,
    pub bytes_payload: u64,
    pub bytes_bootstrap: u64,
    pub bytes_artifact: u64,
    pub offset: usize,
    pub resolve_iterations: usize,
    pub template: BootstrapTemplate,
    pub decompression_type: String,
    pub compressed: bool,
    pub html_path: Option<PathBuf>,
    pub raw_path: Option<PathBuf>,
    pub elapsed: Duration,
    pub stage_times: StageTimes,
}

/// Sizes that feed a snapshot; everything else comes from the timer.
#[derive(Debug, Clone)]
pub struct SnapshotInput {
    pub bytes_input: usize,
    pub bytes_payload: usize,
    pub bytes_artifact: usize,
    pub offset: usize,
    pub resolve_iterations: usize,
    pub template: BootstrapTemplate,
    pub decompression_type: String,
    pub compressed: bool,
    pub html_path: Option<PathBuf>,
    pub raw_path: Option<PathBuf>,
}

impl PackSnapshot {
    pub fn from(input: SnapshotInput, timer: &TelemetryTimer) -> Self {
        Self {
            bytes_input: input.bytes_input as u64,
            bytes_payload: input.bytes_payload as u64,
            bytes_bootstrap: input.offset as u64,
            bytes_artifact: input.bytes_artifact as u64,
            offset: input.offset,
            resolve_iterations: input.resolve_iterations,
            template: input.template,
            decompression_type: input.decompression_type,
            compressed: input.compressed,
            html_path: input.html_path,
            raw_path: input.raw_path,
            elapsed: timer.elapsed(),
            stage_times: timer.stage_times.clone(),
        }
    }

    /// Payload size relative to input, as a percentage.
    pub fn payload_percent(&self) -> f64 {
        percent_of(self.bytes_payload, self.bytes_input)
    }

    pub fn total_stage_time(&self) -> Duration {
        self.stage_times.total()
    }

    pub fn has_all_stages(&self, expected: &[Stage]) -> bool {
        expected.iter().all(|s| self.stage_times.contains(*s))
    }

    /// Internal invariants:
    /// - artifact = bootstrap + payload
    /// - stage times never exceed the elapsed time
    pub fn sanity_check(&self) -> bool {
        self.bytes_artifact == self.bytes_bootstrap + self.bytes_payload
            && self.total_stage_time() <= self.elapsed
    }

    /// One report per written output, html first.
    pub fn reports(&self) -> Vec<SizeReport> {
        let decompression_type = (self.template == BootstrapTemplate::Decompressing)
            .then(|| self.decompression_type.clone());

        let mut reports = Vec::with_capacity(2);
        if self.html_path.is_some() {
            reports.push(SizeReport {
                kind: OutputKind::Html,
                input_bytes: self.bytes_input,
                output_bytes: self.bytes_artifact,
                compressed: self.compressed,
                decompression_type: decompression_type.clone(),
            });
        }
        if self.raw_path.is_some() {
            reports.push(SizeReport {
                kind: OutputKind::Raw,
                input_bytes: self.bytes_input,
                output_bytes: self.bytes_payload,
                compressed: self.compressed,
                decompression_type,
            });
        }
        reports
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    Html,
    Raw,
}

impl OutputKind {
    fn title(&self) -> &'static str {
        match self {
            OutputKind::Html => "Html",
            OutputKind::Raw  => "Raw",
        }
    }

    fn name(&self) -> &'static str {
        match self {
            OutputKind::Html => "html",
            OutputKind::Raw  => "raw",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SizeReport {
    pub kind: OutputKind,
    pub input_bytes: u64,
    pub output_bytes: u64,
    pub compressed: bool,
    pub decompression_type: Option<String>,
}

impl SizeReport {
    pub fn percent(&self) -> f64 {
        percent_of(self.output_bytes, self.input_bytes)
    }
}

impl fmt::Display for SizeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "* {} output stats:", self.kind.title())?;
        writeln!(f, "Input payload size: {} bytes", self.input_bytes)?;
        writeln!(f, "Output {} file size: {} bytes", self.kind.name(), self.output_bytes)?;
        writeln!(f, "Output is {:.2} percent of input", self.percent())?;
        if !self.compressed {
            writeln!(f, "No compression flag was specified")?;
        }
        if let Some(kind) = &self.decompression_type {
            writeln!(f, "Decompression type is '{}'", kind)?;
        }
        Ok(())
    }
}
