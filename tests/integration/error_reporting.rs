use anyhow::Result;
use tempfile::tempdir;

use crate::common::{cf_open, fixture};

fn stderr_of(args: &[&str], config: Option<&str>) -> Result<(bool, String)> {
    let temp = tempdir()?;
    let mut command = cf_open(temp.path());
    if let Some(config) = config {
        command.arg("--wrangler-config").arg(fixture(config));
    }
    let output = command.args(args).output()?;
    Ok((
        output.status.success(),
        String::from_utf8_lossy(&output.stderr).to_string(),
    ))
}

#[test]
fn missing_config_is_reported() -> Result<()> {
    let (success, stderr) = stderr_of(&["--print"], None)?;

    assert!(!success);
    assert!(stderr.contains("failed to load wrangler config"), "stderr: {stderr}");
    assert!(stderr.contains("wrangler config file not found"), "stderr: {stderr}");
    Ok(())
}

#[test]
fn malformed_json_is_reported() -> Result<()> {
    let (success, stderr) = stderr_of(&["--print"], Some("invalid.json"))?;

    assert!(!success);
    assert!(
        stderr.contains("Failed to parse JSON configuration file"),
        "stderr: {stderr}"
    );
    Ok(())
}

#[test]
fn unsupported_extension_is_reported() -> Result<()> {
    let (success, stderr) = stderr_of(&["--print"], Some("wrangler.yaml"))?;

    assert!(!success);
    assert!(
        stderr.contains("Unsupported configuration file format `.yaml`"),
        "stderr: {stderr}"
    );
    Ok(())
}

#[test]
fn config_without_resources_is_reported() -> Result<()> {
    let (success, stderr) = stderr_of(&["--print", "--all"], Some("empty.json"))?;

    assert!(!success);
    assert!(
        stderr.contains("no resources found in wrangler config"),
        "stderr: {stderr}"
    );
    Ok(())
}

#[test]
fn version_output_uses_name_and_semver_format() -> Result<()> {
    let temp = tempdir()?;
    let output = cf_open(temp.path()).arg("--version").output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
    let mut parts = stdout.split_whitespace();
    assert_eq!(parts.next(), Some("cf-open"), "unexpected output: {stdout}");
    let version = parts.next().unwrap_or_default();
    assert!(
        version.split('.').count() == 3 && version.chars().all(|c| c.is_ascii_digit() || c == '.'),
        "version should look like SemVer, got: {stdout}"
    );
    Ok(())
}
