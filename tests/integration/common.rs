use std::{
    io::Write,
    path::{Path, PathBuf},
    process::{Command, Output, Stdio},
};

use anyhow::{Context, Result};

pub const BINARY_PATH: &str = env!("CARGO_BIN_EXE_cf-open");

/// Command for the binary with a clean account environment.
pub fn cf_open(cwd: &Path) -> Command {
    let mut command = Command::new(BINARY_PATH);
    command
        .current_dir(cwd)
        .env_remove("CLOUDFLARE_ACCOUNT_ID")
        .env_remove("RUST_LOG")
        .stdin(Stdio::null());
    command
}

/// Run the binary, feeding `stdin` to it.
pub fn run_with_stdin(mut command: Command, stdin: &str) -> Result<Output> {
    command
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    let mut child = command.spawn().context("failed to spawn cf-open")?;
    child
        .stdin
        .take()
        .context("child stdin")?
        .write_all(stdin.as_bytes())
        .context("failed to write stdin")?;
    child.wait_with_output().context("failed to wait for cf-open")
}

pub fn fixture(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(relative)
}

pub fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}
