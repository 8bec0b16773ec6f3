use std::fs;

use anyhow::Result;
use tempfile::tempdir;

use crate::common::{cf_open, stdout_lines};

const WORKER_ONLY: &str = r#"{ "name": "w" }"#;

#[test]
fn account_flag_overrides_config() -> Result<()> {
    let temp = tempdir()?;
    fs::write(
        temp.path().join("wrangler.json"),
        r#"{ "name": "w", "account_id": "from-config" }"#,
    )?;

    let output = cf_open(temp.path())
        .args(["--print", "--account-id", "from-flag"])
        .output()?;

    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        vec!["https://dash.cloudflare.com/from-flag/workers/services/view/w/production"]
    );
    Ok(())
}

#[test]
fn environment_variable_overrides_config() -> Result<()> {
    let temp = tempdir()?;
    fs::write(
        temp.path().join("wrangler.json"),
        r#"{ "name": "w", "account_id": "from-config" }"#,
    )?;

    let output = cf_open(temp.path())
        .env("CLOUDFLARE_ACCOUNT_ID", "from-env")
        .arg("--print")
        .output()?;

    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        vec!["https://dash.cloudflare.com/from-env/workers/services/view/w/production"]
    );
    Ok(())
}

#[test]
fn wrangler_account_cache_is_used_as_fallback() -> Result<()> {
    let temp = tempdir()?;
    fs::write(temp.path().join("wrangler.json"), WORKER_ONLY)?;
    let cache_dir = temp.path().join("node_modules/.cache/wrangler");
    fs::create_dir_all(&cache_dir)?;
    fs::write(
        cache_dir.join("wrangler-account.json"),
        r#"{"account": {"id": "from-cache", "name": "Example"}}"#,
    )?;

    let output = cf_open(temp.path()).arg("--print").output()?;

    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        vec!["https://dash.cloudflare.com/from-cache/workers/services/view/w/production"]
    );
    Ok(())
}

#[test]
fn malformed_cache_falls_back_to_redirect_url() -> Result<()> {
    let temp = tempdir()?;
    fs::write(temp.path().join("wrangler.json"), WORKER_ONLY)?;
    let cache_dir = temp.path().join("node_modules/.cache/wrangler");
    fs::create_dir_all(&cache_dir)?;
    fs::write(cache_dir.join("wrangler-account.json"), "{not json")?;

    let output = cf_open(temp.path()).arg("--print").output()?;

    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        vec!["https://dash.cloudflare.com/?to=/:account/workers/services/view/w/production"]
    );
    Ok(())
}
