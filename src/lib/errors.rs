use std::{io, path::PathBuf, process::ExitStatus};

use thiserror::Error;

use crate::config::ConfigFormat;

/// Errors that can occur while locating or parsing a Wrangler configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No explicit path was given and none of the conventional files exist.
    #[error("wrangler config file not found (looked for {})", display_candidates(.searched))]
    NotFound { searched: Vec<PathBuf> },
    /// Failed to read the configuration file.
    #[error("Failed to read configuration file {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The file extension does not map to a known format.
    #[error("Unsupported configuration file format `{extension}` ({path})")]
    UnsupportedFormat { path: PathBuf, extension: String },
    /// The file was read but its content could not be decoded.
    #[error("Failed to parse {format} configuration file {path}")]
    Parse {
        path: PathBuf,
        format: ConfigFormat,
        #[source]
        source: ParseFailure,
    },
}

impl ConfigError {
    /// Helper to wrap an I/O error as a read failure.
    pub fn from_read_error(path: PathBuf, source: io::Error) -> Self {
        Self::FileRead { path, source }
    }

    /// Helper to wrap a decoder diagnostic as a parse failure.
    pub fn from_parse_error(
        path: PathBuf,
        format: ConfigFormat,
        source: impl Into<ParseFailure>,
    ) -> Self {
        Self::Parse {
            path,
            format,
            source: source.into(),
        }
    }
}

/// Underlying decoder diagnostic for [`ConfigError::Parse`].
#[derive(Debug, Error)]
pub enum ParseFailure {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
    #[error("configuration is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

/// Failures after the configuration has been resolved into resources.
#[derive(Debug, Error)]
pub enum OpenError {
    #[error("no resources found in wrangler config")]
    NoResources,
    #[error("selection cancelled")]
    SelectionCancelled,
    #[error("invalid selection `{input}`: expected a number between 1 and {max}")]
    InvalidSelection { input: String, max: usize },
    #[error("failed to launch browser for {url}")]
    BrowserLaunch {
        url: String,
        #[source]
        source: io::Error,
    },
    #[error("browser command exited abnormally for {url} ({status})")]
    BrowserExit { url: String, status: ExitStatus },
    #[error("terminal I/O failed")]
    Io(#[from] io::Error),
}

fn display_candidates(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|path| path.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
