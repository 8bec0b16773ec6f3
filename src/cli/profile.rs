//! OpenProfile and account override resolution.
use std::{env, path::PathBuf};

use crate::config::DEFAULT_WRANGLER_CACHE_PATH;

/// Environment variable Wrangler itself reads for the account id.
pub const ACCOUNT_ID_ENV: &str = "CLOUDFLARE_ACCOUNT_ID";

/// How resources are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    /// Ask the user (skipped when there is only one resource).
    Prompt,
    All,
}

impl SelectionMode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            SelectionMode::Prompt => "prompt",
            SelectionMode::All => "all",
        }
    }
}

/// What happens with the chosen URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Browser,
    Print,
}

impl OutputMode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            OutputMode::Browser => "browser",
            OutputMode::Print => "print",
        }
    }
}

/// Source for the account override.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverrideSource {
    Cli,
    Env,
    Missing,
}

impl OverrideSource {
    pub const fn as_str(&self) -> &'static str {
        match self {
            OverrideSource::Cli => "cli",
            OverrideSource::Env => "env",
            OverrideSource::Missing => "missing",
        }
    }
}

/// Everything one run needs, resolved from flags and environment.
#[derive(Debug, Clone)]
pub struct OpenProfile {
    pub config_path: Option<PathBuf>,
    pub account_override: Option<String>,
    pub override_source: OverrideSource,
    pub cache_path: PathBuf,
    pub selection: SelectionMode,
    pub output: OutputMode,
}

impl OpenProfile {
    /// Profile with defaults: discover the config, prompt, open in browser.
    pub fn new() -> Self {
        Self {
            config_path: None,
            account_override: None,
            override_source: OverrideSource::Missing,
            cache_path: PathBuf::from(DEFAULT_WRANGLER_CACHE_PATH),
            selection: SelectionMode::Prompt,
            output: OutputMode::Browser,
        }
    }
}

impl Default for OpenProfile {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve the account override in the order: CLI flag → `CLOUDFLARE_ACCOUNT_ID`.
pub fn resolve_account_override(flag: Option<String>) -> (Option<String>, OverrideSource) {
    resolve_account_override_from(flag, env::var(ACCOUNT_ID_ENV).ok())
}

fn resolve_account_override_from(
    flag: Option<String>,
    env_value: Option<String>,
) -> (Option<String>, OverrideSource) {
    if let Some(id) = flag.and_then(|v| normalize_account_id(&v)) {
        return (Some(id), OverrideSource::Cli);
    }

    if let Some(id) = env_value.and_then(|v| normalize_account_id(&v)) {
        return (Some(id), OverrideSource::Env);
    }

    (None, OverrideSource::Missing)
}

fn normalize_account_id(raw: &str) -> Option<String> {
    if raw.trim().is_empty() {
        return None;
    }
    Some(raw.to_string())
}
