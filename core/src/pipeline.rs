//! pipeline.rs
//! Sequential pack pipeline.
//!
//! Summary: load -> (optionally) compress -> resolve and render bootstrap ->
//! assemble -> (optionally) verify -> write outputs. Every stage takes
//! borrowed inputs and returns new owned values; nothing is shared.

use tracing::{debug, info, warn};

use crate::artifact::{assemble, verify_artifact, Artifact};
use crate::bootstrap::RenderedBootstrap;
use crate::compression::{
    create_compressor, prepare_payload, DecompressionType, PayloadBytes, PayloadCompressor,
};
use crate::config::{PackConfig, PackOptions};
use crate::io;
use crate::telemetry::{PackSnapshot, SnapshotInput, Stage, TelemetryTimer};
use crate::types::PackError;

/// Everything one in-memory pack produces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackOutput {
    pub payload: PayloadBytes,
    pub bootstrap: RenderedBootstrap,
    pub artifact: Artifact,
}

/// Pack `input` in memory with the default compressor.
pub fn pack_bytes(input: &[u8], options: &PackOptions) -> Result<PackOutput, PackError> {
    let compressor = create_compressor();
    let mut timer = TelemetryTimer::new();
    pack_with(input, options, compressor.as_ref(), &mut timer)
}

/// Pack `input` in memory with an explicit compressor, charging stage
/// times to `timer`.
pub fn pack_with(
    input: &[u8],
    options: &PackOptions,
    compressor: &dyn PayloadCompressor,
    timer: &mut TelemetryTimer,
) -> Result<PackOutput, PackError> {
    options.validate()?;
    // Unused without compression, where any identifier is accepted.
    let container = if options.compress { options.container()? } else { DecompressionType::default() };

    let payload = timer.time(Stage::Compress, || {
        prepare_payload(input, options.compress, compressor, &options.params, container)
    })?;

    let template = options.template();
    let bootstrap = timer.time(Stage::Render, || template.render(&options.decompression_type))?;
    debug!(
        template = template.name(),
        offset = bootstrap.offset(),
        iterations = bootstrap.iterations(),
        "bootstrap rendered"
    );

    let artifact = timer.time(Stage::Assemble, || assemble(&bootstrap, &payload));

    Ok(PackOutput { payload, bootstrap, artifact })
}

/// Run a full pack described by `config` with the default compressor.
pub fn run(config: &PackConfig) -> Result<PackSnapshot, PackError> {
    let compressor = create_compressor();
    run_with(config, compressor.as_ref())
}

pub fn run_with(config: &PackConfig, compressor: &dyn PayloadCompressor) -> Result<PackSnapshot, PackError> {
    config.validate()?;
    let mut timer = TelemetryTimer::new();

    let input = timer.time(Stage::Read, || io::read_payload(&config.payload_path))?;
    let output = pack_with(&input, &config.options, compressor, &mut timer)?;

    if config.verify {
        timer.time(Stage::Verify, || {
            verify_artifact(output.artifact.as_bytes(), &output.payload, &input)
        })?;
    }

    if !config.write_html && !config.dump_raw {
        warn!("neither html nor raw output requested, nothing will be written");
    }

    let html_path = if config.write_html {
        timer.time(Stage::Write, || io::write_artifact(&config.html_path, &output.artifact))?;
        Some(config.html_path.clone())
    } else {
        None
    };

    let raw_path = if config.dump_raw {
        let path = config.raw_path();
        timer.time(Stage::Write, || io::write_raw(&path, &output.payload))?;
        Some(path)
    } else {
        None
    };

    timer.finish();

    let snapshot = PackSnapshot::from(
        SnapshotInput {
            bytes_input: input.len(),
            bytes_payload: output.payload.len(),
            bytes_artifact: output.artifact.len(),
            offset: output.artifact.offset(),
            resolve_iterations: output.bootstrap.iterations(),
            template: config.options.template(),
            decompression_type: config.options.decompression_type.clone(),
            compressed: output.payload.is_compressed(),
            html_path,
            raw_path,
        },
        &timer,
    );

    for stage in Stage::ALL {
        if snapshot.stage_times.contains(stage) {
            debug!(%stage, ms = snapshot.stage_times.get_ms(stage), "stage time");
        }
    }
    info!(
        input = snapshot.bytes_input,
        payload = snapshot.bytes_payload,
        artifact = snapshot.bytes_artifact,
        elapsed_ms = snapshot.elapsed.as_secs_f64() * 1_000.0,
        "pack finished"
    );

    Ok(snapshot)
}
