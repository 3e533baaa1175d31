//! jspack: pack a script into a self-extracting html document.
//!
//! `jspack [options] infile.js outfile.html`

mod args;
mod logging;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, warn};

use args::Cli;
use jspack_core::pipeline;
use jspack_core::telemetry::SizeReport;

fn main() -> ExitCode {
    logging::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("(error) {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.into_config().context("invalid command line")?;
    debug!(?config, "configuration");
    let snapshot = pipeline::run(&config)
        .with_context(|| format!("packing {} failed", config.payload_path.display()))?;

    if config.statistics {
        // Informational only; never fails the run.
        if let Err(e) = print_reports(&mut io::stdout().lock(), &snapshot.reports()) {
            warn!(error = %e, "could not print size statistics");
        }
    }
    Ok(())
}

fn print_reports(out: &mut impl Write, reports: &[SizeReport]) -> io::Result<()> {
    for report in reports {
        write!(out, "{}", report)?;
    }
    out.flush()
}
