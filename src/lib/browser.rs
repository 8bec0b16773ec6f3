//! Shared helpers for launching the system browser.

use std::{
    io::Write,
    process::{Command, Stdio},
};

use tracing::debug;

use crate::lib::errors::OpenError;

/// Build the platform command that hands `url` to the default browser.
pub fn build_browser_command(url: &str) -> Command {
    let mut command = if cfg!(target_os = "macos") {
        Command::new("open")
    } else if cfg!(target_os = "windows") {
        let mut command = Command::new("cmd");
        // `start` treats the first quoted argument as the window title.
        command.args(["/C", "start", ""]);
        command
    } else {
        Command::new("xdg-open")
    };
    command.arg(url);
    command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    command
}

/// Open a single URL, echoing it to `out` first.
pub fn open_url<W: Write>(url: &str, out: &mut W) -> Result<(), OpenError> {
    open_with(build_browser_command(url), url, out)
}

/// Open every URL in order, stopping at the first failure.
pub fn open_urls<'a, W: Write>(
    urls: impl IntoIterator<Item = &'a str>,
    out: &mut W,
) -> Result<(), OpenError> {
    for url in urls {
        open_url(url, out)?;
    }
    Ok(())
}

fn open_with<W: Write>(mut command: Command, url: &str, out: &mut W) -> Result<(), OpenError> {
    writeln!(out, "Opening {url}")?;
    out.flush()?;
    debug!(
        target: "cf_open::cli",
        program = ?command.get_program(),
        url,
        "Launching browser"
    );

    let status = command.status().map_err(|source| OpenError::BrowserLaunch {
        url: url.to_string(),
        source,
    })?;
    if !status.success() {
        return Err(OpenError::BrowserExit {
            url: url.to_string(),
            status,
        });
    }
    Ok(())
}
