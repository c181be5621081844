//! # Calculator CLI Application
//!
//! Menu-driven terminal calculator. Equations are typed in one field at a
//! time (Manual) or read in bulk from a text file (Read and Compute); each
//! result is printed and appended to the equation log.
//!
//! Diagnostics go to stderr through `tracing`; set `RUST_LOG` or pass
//! `--verbose` to see them.

mod args;
mod menu;
mod session;

use std::io;

use anyhow::Context;
use calc_core::file_io::EquationLog;
use calc_core::settings::{load_settings, CalculatorSettings};
use calc_core::validation::InputValidator;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::args::Options;
use crate::session::Session;

fn main() -> anyhow::Result<()> {
    let options = Options::parse();
    init_tracing(options.verbose);

    let settings = resolve_settings(&options)?;
    info!(log_file = %settings.log_file.display(), "starting calculator");

    let stdin = io::stdin();
    let validator = InputValidator::new(stdin.lock(), io::stdout(), settings.prompt.as_str());
    let mut session = Session::new(validator, EquationLog::new(&settings.log_file));
    session.run().context("calculator session failed")?;

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn resolve_settings(options: &Options) -> anyhow::Result<CalculatorSettings> {
    let mut settings = match &options.config {
        Some(path) => load_settings(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => CalculatorSettings::default(),
    };
    if let Some(log_file) = &options.log_file {
        settings = settings.with_log_file(log_file);
    }
    Ok(settings)
}
