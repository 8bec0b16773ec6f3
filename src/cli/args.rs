//! CLI argument definitions and `OpenProfile` construction.
use std::path::PathBuf;

use clap::Parser;

use super::{resolve_account_override, OpenProfile, OutputMode, SelectionMode};

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "cf-open",
    author,
    version,
    about = "Open the Cloudflare dashboard for your project from the CLI",
    long_about = None
)]
pub struct OpenArgs {
    /// Path to the wrangler configuration file (defaults to wrangler.jsonc, wrangler.json, wrangler.toml).
    #[arg(long = "wrangler-config", value_name = "PATH")]
    pub wrangler_config: Option<PathBuf>,
    /// Cloudflare account ID (overrides CLOUDFLARE_ACCOUNT_ID and account_id in the config).
    #[arg(long = "account-id", value_name = "ID")]
    pub account_id: Option<String>,
    /// Open all resources instead of choosing one.
    #[arg(short = 'a', long = "all", default_value_t = false)]
    pub all: bool,
    /// Print URLs to stdout instead of opening them in the browser.
    #[arg(short = 'p', long = "print", default_value_t = false)]
    pub print: bool,
}

impl OpenArgs {
    /// Build an `OpenProfile` from CLI args and environment variables.
    pub fn into_profile(self) -> OpenProfile {
        let (account_override, override_source) = resolve_account_override(self.account_id);

        OpenProfile {
            config_path: self.wrangler_config,
            account_override,
            override_source,
            selection: if self.all {
                SelectionMode::All
            } else {
                SelectionMode::Prompt
            },
            output: if self.print {
                OutputMode::Print
            } else {
                OutputMode::Browser
            },
            ..OpenProfile::default()
        }
    }
}
