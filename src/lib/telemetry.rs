//! Telemetry initialization and run summary logging.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize `tracing` and format developer logs.
///
/// Normal runs stay quiet (`warn`); set `RUST_LOG=cf_open=debug` to see how
/// the configuration and account were resolved.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Payload describing one resolution run as structured telemetry.
#[derive(Debug)]
pub struct ResolutionTelemetry<'a> {
    pub config_path: &'a str,
    pub format: &'a str,
    pub account_source: &'a str,
    pub override_source: &'a str,
    pub resource_count: usize,
    pub mode: &'a str,
    pub output: &'a str,
}

/// Emit the resolution summary to `tracing`.
pub fn emit_resolution(telemetry: &ResolutionTelemetry<'_>) {
    info!(
        target: "cf_open::cli",
        config_path = telemetry.config_path,
        format = telemetry.format,
        account_source = telemetry.account_source,
        override_source = telemetry.override_source,
        resource_count = telemetry.resource_count,
        mode = telemetry.mode,
        output = telemetry.output,
        "Resolved dashboard resources"
    );
}
