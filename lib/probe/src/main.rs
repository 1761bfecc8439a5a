//! # Lock Descriptor Probe
//!
//! Writes `Fcntl_Lock.h` into the working directory, describing the layout of
//! `struct flock` of the build platform. Takes no arguments. Exits with
//! failure if the header cannot be produced.

use std::process::ExitCode;

use anyhow::{Context, Result};

// The exit status is the only contract, so the logger stays silent in every
// profile. Records of the library are still routed through it.
const LOG_LEVEL: simplelog::LevelFilter = simplelog::LevelFilter::Off;

fn init_log() {
    let mut lcfg = simplelog::ConfigBuilder::new();
    lcfg.set_time_level(simplelog::LevelFilter::Off)
        .set_location_level(simplelog::LevelFilter::Off)
        .set_target_level(simplelog::LevelFilter::Off)
        .set_thread_level(simplelog::LevelFilter::Off);

    // A missing logger does not affect the header.
    let _ = simplelog::TermLogger::init(
        LOG_LEVEL,
        lcfg.build(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Never,
    );
}

fn run() -> Result<()> {
    fcntl_probe::run()
        .with_context(|| format!("Failed to generate {}", fcntl_probe::OUTPUT_PATH))
}

fn main() -> ExitCode {
    init_log();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
