//! Account identifier resolution.

use std::{fs, path::Path};

use serde::Deserialize;
use tracing::debug;

use super::WranglerConfig;

/// Where Wrangler caches the account chosen during `wrangler login`.
pub const DEFAULT_WRANGLER_CACHE_PATH: &str = "node_modules/.cache/wrangler/wrangler-account.json";

/// Source for the resolved account identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountSource {
    Override,
    Config,
    Cache,
    Missing,
}

impl AccountSource {
    pub const fn as_str(&self) -> &'static str {
        match self {
            AccountSource::Override => "override",
            AccountSource::Config => "config",
            AccountSource::Cache => "cache",
            AccountSource::Missing => "missing",
        }
    }
}

/// Resolved account identifier; `id` is empty when `source` is `Missing`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountResolution {
    pub id: String,
    pub source: AccountSource,
}

impl AccountResolution {
    fn found(id: &str, source: AccountSource) -> Self {
        Self {
            id: id.to_string(),
            source,
        }
    }

    fn missing() -> Self {
        Self {
            id: String::new(),
            source: AccountSource::Missing,
        }
    }

    /// True when a usable (non-empty) identifier was found.
    pub fn is_present(&self) -> bool {
        self.source != AccountSource::Missing
    }
}

#[derive(Debug, Deserialize)]
struct AccountCache {
    account: CachedAccount,
}

#[derive(Debug, Deserialize)]
struct CachedAccount {
    #[serde(default)]
    id: String,
}

/// Resolve the account in the order: override → `account_id` in config.
pub fn resolve_account_id(config: &WranglerConfig, override_id: Option<&str>) -> AccountResolution {
    if let Some(id) = override_id.and_then(non_blank) {
        return AccountResolution::found(id, AccountSource::Override);
    }

    if let Some(id) = config.account_id.as_deref().and_then(non_blank) {
        return AccountResolution::found(id, AccountSource::Config);
    }

    AccountResolution::missing()
}

/// Like [`resolve_account_id`], falling back to Wrangler's account cache file.
pub fn resolve_account_id_with_cache(
    config: &WranglerConfig,
    override_id: Option<&str>,
    cache_path: &Path,
) -> AccountResolution {
    let resolution = resolve_account_id(config, override_id);
    if resolution.is_present() {
        return resolution;
    }

    let cached = read_cached_account_id(cache_path);
    match non_blank(&cached) {
        Some(id) => AccountResolution::found(id, AccountSource::Cache),
        None => resolution,
    }
}

/// Read the cached account id; returns an empty string on any failure.
pub fn read_cached_account_id(path: &Path) -> String {
    let data = match fs::read(path) {
        Ok(data) => data,
        Err(err) => {
            debug!(
                target: "cf_open::account",
                path = %path.display(),
                reason = %err,
                "Wrangler account cache not readable"
            );
            return String::new();
        }
    };

    match serde_json::from_slice::<AccountCache>(&data) {
        Ok(cache) => cache.account.id,
        Err(err) => {
            debug!(
                target: "cf_open::account",
                path = %path.display(),
                reason = %err,
                "Wrangler account cache is malformed"
            );
            String::new()
        }
    }
}

/// Whitespace-only counts as absent; anything else is used verbatim.
fn non_blank(raw: &str) -> Option<&str> {
    (!raw.trim().is_empty()).then_some(raw)
}
