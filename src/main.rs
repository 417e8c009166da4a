//! Gigabyte Monitor Control CLI
//!
//! A command-line tool for setting Gigabyte monitor properties over USB HID.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use gbmonctl::cli::Cli;
use gbmonctl::Monitor;

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Apply all requested property writes. Returns whether every write
/// succeeded; a failed write is reported but does not block the rest.
fn run(cli: &Cli) -> anyhow::Result<bool> {
    let requests = cli.requested();
    if requests.is_empty() {
        eprintln!("No property flags specified. Use --help for usage.");
        return Ok(true);
    }

    let monitor = Monitor::open().context("Failed to open monitor")?;

    let mut all_ok = true;
    for (property, value) in requests {
        match monitor.set(property, value) {
            Ok(()) => println!("{property} set to {value}"),
            Err(e) => {
                eprintln!("Failed to set {property}: {e}");
                all_ok = false;
            }
        }
    }

    Ok(all_ok)
}
