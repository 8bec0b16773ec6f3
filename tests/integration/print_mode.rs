use std::fs;

use anyhow::Result;
use tempfile::tempdir;

use crate::common::{cf_open, fixture, run_with_stdin, stdout_lines};

#[test]
fn print_all_lists_every_resource_in_order() -> Result<()> {
    let temp = tempdir()?;
    let output = cf_open(temp.path())
        .arg("--wrangler-config")
        .arg(fixture("wrangler.jsonc"))
        .args(["--all", "--print"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(
        stdout_lines(&output),
        vec![
            "https://dash.cloudflare.com/acc/workers/services/view/my-worker/production",
            "https://dash.cloudflare.com/acc/workers/services/view/my-worker/production/observability",
            "https://dash.cloudflare.com/acc/workers/kv/namespaces/kv-id/metrics",
            "https://dash.cloudflare.com/acc/secrets-store/s1",
            "https://dash.cloudflare.com/acc/secrets-store/s2",
        ]
    );
    Ok(())
}

#[test]
fn discovers_config_in_working_directory() -> Result<()> {
    let temp = tempdir()?;
    fs::copy(fixture("wrangler.toml"), temp.path().join("wrangler.toml"))?;

    let output = cf_open(temp.path()).args(["-a", "-p"]).output()?;

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(
        stdout_lines(&output),
        vec![
            "https://dash.cloudflare.com/?to=/:account/workers/services/view/toml-worker/production",
            "https://dash.cloudflare.com/?to=/:account/workers/services/view/toml-worker/production/settings#trigger-events",
            "https://dash.cloudflare.com/?to=/:account/r2/default/buckets/my-bucket",
            "https://dash.cloudflare.com/?to=/:account/workers/d1/databases/db-123/metrics",
        ]
    );
    Ok(())
}

#[test]
fn prompt_selection_prints_chosen_url() -> Result<()> {
    let temp = tempdir()?;
    let mut command = cf_open(temp.path());
    command
        .arg("--wrangler-config")
        .arg(fixture("wrangler.jsonc"))
        .arg("--print");

    let output = run_with_stdin(command, "3\n")?;

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(
        stdout_lines(&output),
        vec!["https://dash.cloudflare.com/acc/workers/kv/namespaces/kv-id/metrics"]
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("  1) Worker: my-worker"), "stderr: {stderr}");
    assert!(stderr.contains("  4) Secrets Store: s1"), "stderr: {stderr}");
    assert!(stderr.contains("Select a resource to open [1-5]"), "stderr: {stderr}");
    Ok(())
}

#[test]
fn cancelled_prompt_fails() -> Result<()> {
    let temp = tempdir()?;
    let mut command = cf_open(temp.path());
    command
        .arg("--wrangler-config")
        .arg(fixture("wrangler.jsonc"))
        .arg("--print");

    let output = run_with_stdin(command, "")?;

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("selection cancelled"), "stderr: {stderr}");
    Ok(())
}
