//! CLI entrypoint: load config, resolve resources, then print or open them.
use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::info;

use crate::{
    config::{resolve_account_id_with_cache, LoadedConfig, WranglerConfig},
    dashboard::{resources_from_config, Resource},
    lib::{
        browser,
        errors::OpenError,
        selector,
        telemetry::{emit_resolution, ResolutionTelemetry},
    },
};

pub mod args;
pub mod exit;
pub mod profile;

pub use args::OpenArgs;
pub use exit::CliExit;
pub use profile::{
    resolve_account_override, OpenProfile, OutputMode, OverrideSource, SelectionMode,
    ACCOUNT_ID_ENV,
};

/// Run one invocation, printing URLs to stdout in print mode.
pub fn run(profile: OpenProfile) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with(profile, &mut out)
}

/// Same as [`run`] with an explicit writer for printed URLs.
pub fn run_with<W: Write>(profile: OpenProfile, out: &mut W) -> Result<()> {
    let loaded = WranglerConfig::load(profile.config_path.as_deref())
        .context("failed to load wrangler config")?;
    let resources = resolve_resources(&loaded, &profile);
    if resources.is_empty() {
        return Err(OpenError::NoResources.into());
    }

    let chosen: Vec<&Resource> = match profile.selection {
        SelectionMode::All => resources.iter().collect(),
        SelectionMode::Prompt => vec![selector::select_resource(&resources)
            .context("failed to select resource")?],
    };

    deliver(&chosen, profile.output, out)
}

/// Resolve the account and build the resource list for a loaded config.
pub fn resolve_resources(loaded: &LoadedConfig, profile: &OpenProfile) -> Vec<Resource> {
    let account = resolve_account_id_with_cache(
        &loaded.config,
        profile.account_override.as_deref(),
        &profile.cache_path,
    );
    let resources = resources_from_config(&loaded.config, &account.id, account.is_present());

    emit_resolution(&ResolutionTelemetry {
        config_path: loaded.source_path.to_string_lossy().as_ref(),
        format: loaded.format.as_str(),
        account_source: account.source.as_str(),
        override_source: profile.override_source.as_str(),
        resource_count: resources.len(),
        mode: profile.selection.as_str(),
        output: profile.output.as_str(),
    });
    resources
}

fn deliver<W: Write>(chosen: &[&Resource], output: OutputMode, out: &mut W) -> Result<()> {
    match output {
        OutputMode::Print => {
            for resource in chosen {
                writeln!(out, "{}", resource.url).context("failed to write URL")?;
            }
            Ok(())
        }
        OutputMode::Browser => {
            info!(
                target: "cf_open::cli",
                count = chosen.len(),
                "Opening resources in browser"
            );
            browser::open_urls(chosen.iter().map(|resource| resource.url.as_str()), out)?;
            Ok(())
        }
    }
}
