//! Locate and parse the Wrangler project configuration.
use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing::error;

use crate::lib::errors::{ConfigError, ParseFailure};

pub mod account;
pub mod bindings;
pub mod format;
pub mod telemetry;

pub use account::{
    read_cached_account_id, resolve_account_id, resolve_account_id_with_cache, AccountResolution,
    AccountSource, DEFAULT_WRANGLER_CACHE_PATH,
};
pub use bindings::{
    BindingConfig, D1Database, KvNamespace, ObservabilityConfig, Pipeline, QueueProducer,
    QueuesConfig, R2Bucket, SecretsStoreSecret, TriggersConfig, VectorizeIndex, VpcService,
    Workflow,
};
pub use format::{strip_jsonc, ConfigFormat};

/// Conventional file names, probed in this order.
pub const CONFIG_CANDIDATES: [&str; 3] = ["wrangler.jsonc", "wrangler.json", "wrangler.toml"];

/// Typed view of the parts of a Wrangler configuration that map to dashboard pages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WranglerConfig {
    pub name: Option<String>,
    pub account_id: Option<String>,
    pub compatibility_date: Option<String>,
    pub observability: Option<ObservabilityConfig>,
    pub triggers: Option<TriggersConfig>,
    pub queues: Option<QueuesConfig>,
    #[serde(deserialize_with = "bindings::null_as_default")]
    pub workflows: Vec<Workflow>,
    pub browser: Option<BindingConfig>,
    #[serde(deserialize_with = "bindings::null_as_default")]
    pub vpc_services: Vec<VpcService>,
    #[serde(deserialize_with = "bindings::null_as_default")]
    pub r2_buckets: Vec<R2Bucket>,
    #[serde(deserialize_with = "bindings::null_as_default")]
    pub kv_namespaces: Vec<KvNamespace>,
    #[serde(deserialize_with = "bindings::null_as_default")]
    pub d1_databases: Vec<D1Database>,
    #[serde(deserialize_with = "bindings::null_as_default")]
    pub pipelines: Vec<Pipeline>,
    #[serde(deserialize_with = "bindings::null_as_default")]
    pub vectorize: Vec<VectorizeIndex>,
    #[serde(deserialize_with = "bindings::null_as_default")]
    pub secrets_store_secrets: Vec<SecretsStoreSecret>,
    pub images: Option<BindingConfig>,
}

/// A parsed configuration together with where it came from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: WranglerConfig,
    pub source_path: PathBuf,
    pub format: ConfigFormat,
}

impl WranglerConfig {
    /// Load `explicit` if given, otherwise the first conventional file in the current directory.
    pub fn load(explicit: Option<&Path>) -> Result<LoadedConfig, ConfigError> {
        Self::load_in(Path::new(""), explicit)
    }

    /// Same as [`WranglerConfig::load`] but probes `dir` instead of the current directory.
    pub fn load_in(dir: &Path, explicit: Option<&Path>) -> Result<LoadedConfig, ConfigError> {
        let path = Self::resolve_path(dir, explicit)?;
        Self::load_from_path(path)
    }

    /// Pick the file to read: a non-empty explicit path wins over discovery.
    pub fn resolve_path(dir: &Path, explicit: Option<&Path>) -> Result<PathBuf, ConfigError> {
        if let Some(path) = explicit.filter(|path| !path.as_os_str().is_empty()) {
            telemetry::log_path_source(path, true);
            return Ok(path.to_path_buf());
        }

        match Self::discover_in(dir) {
            Some(path) => {
                telemetry::log_path_source(&path, false);
                Ok(path)
            }
            None => {
                let searched = CONFIG_CANDIDATES
                    .iter()
                    .map(|candidate| dir.join(candidate))
                    .collect();
                Err(ConfigError::NotFound { searched })
            }
        }
    }

    /// Return the first conventional configuration file that exists in `dir`.
    pub fn discover_in(dir: &Path) -> Option<PathBuf> {
        CONFIG_CANDIDATES
            .iter()
            .map(|candidate| dir.join(candidate))
            .find(|path| path.is_file())
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: PathBuf) -> Result<LoadedConfig, ConfigError> {
        telemetry::log_load_started(&path);

        let bytes = fs::read(&path).map_err(|err| {
            let error = ConfigError::from_read_error(path.clone(), err);
            error!(
                target: "cf_open::config",
                path = %path.display(),
                reason = %error,
                "Failed to read configuration file"
            );
            error
        })?;

        let extension = ConfigFormat::extension_of(&path);
        let format = ConfigFormat::from_extension(&extension).ok_or_else(|| {
            ConfigError::UnsupportedFormat {
                path: path.clone(),
                extension: format!(".{extension}"),
            }
        })?;

        let config = Self::parse_bytes(&bytes, format).map_err(|err| {
            let error = ConfigError::from_parse_error(path.clone(), format, err);
            error!(
                target: "cf_open::config",
                path = %path.display(),
                reason = %error,
                "Failed to parse configuration file"
            );
            error
        })?;

        let loaded = LoadedConfig {
            config,
            source_path: path,
            format,
        };
        telemetry::log_loaded(&loaded);
        Ok(loaded)
    }

    /// Decode raw file content; bytes that are not UTF-8 are a parse failure.
    pub fn parse_bytes(bytes: &[u8], format: ConfigFormat) -> Result<Self, ParseFailure> {
        let content = std::str::from_utf8(bytes)?;
        Self::parse_str(content, format)
    }

    /// Decode configuration text in the given format.
    pub fn parse_str(content: &str, format: ConfigFormat) -> Result<Self, ParseFailure> {
        match format {
            ConfigFormat::Json => Ok(serde_json::from_str(&strip_jsonc(content))?),
            ConfigFormat::Toml => Ok(toml::from_str(content)?),
        }
    }

    /// Project name, if set and non-empty.
    pub fn worker_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }
}
