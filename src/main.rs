//! Entry point for cf-open.
use std::process::ExitCode;

use cf_open::{
    cli::{self, CliExit, OpenArgs},
    lib::telemetry,
};
use clap::Parser;

fn main() -> ExitCode {
    match bootstrap() {
        Ok(()) => ExitCode::SUCCESS,
        Err(exit) => exit.report(),
    }
}

fn bootstrap() -> Result<(), CliExit> {
    telemetry::init_tracing().map_err(CliExit::from_error)?;
    let profile = OpenArgs::parse().into_profile();
    cli::run(profile).map_err(CliExit::from_error)
}
