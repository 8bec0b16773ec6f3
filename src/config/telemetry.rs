use std::path::Path;

use tracing::{debug, info};

use super::{LoadedConfig, CONFIG_CANDIDATES};

pub fn log_path_source(path: &Path, explicit: bool) {
    if explicit {
        info!(
            target: "cf_open::config",
            path = %path.display(),
            "Using configuration file given by --wrangler-config"
        );
    } else {
        debug!(
            target: "cf_open::config",
            path = %path.display(),
            candidates = ?CONFIG_CANDIDATES,
            "Discovered configuration file in working directory"
        );
    }
}

pub fn log_load_started(path: &Path) {
    debug!(
        target: "cf_open::config",
        path = %path.display(),
        "Starting configuration load"
    );
}

pub fn log_loaded(loaded: &LoadedConfig) {
    let config = &loaded.config;
    info!(
        target: "cf_open::config",
        path = %loaded.source_path.display(),
        format = loaded.format.as_str(),
        name = config.worker_name().unwrap_or(""),
        has_account_id = config.account_id.is_some(),
        kv_namespaces = config.kv_namespaces.len(),
        d1_databases = config.d1_databases.len(),
        r2_buckets = config.r2_buckets.len(),
        secrets_store_secrets = config.secrets_store_secrets.len(),
        "Configuration file loaded successfully"
    );
}
