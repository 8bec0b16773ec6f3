//! Configuration file formats and JSON-with-comments normalization.

use std::{fmt, path::Path};

/// Supported on-disk formats, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `.json` and `.jsonc`; comments are stripped before decoding.
    Json,
    Toml,
}

impl ConfigFormat {
    /// Map a lower-cased extension (without the dot) to a format.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            "json" | "jsonc" => Some(ConfigFormat::Json),
            "toml" => Some(ConfigFormat::Toml),
            _ => None,
        }
    }

    /// Lower-cased extension of `path`, empty when it has none.
    pub fn extension_of(path: &Path) -> String {
        path.extension()
            .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default()
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            ConfigFormat::Json => "JSON",
            ConfigFormat::Toml => "TOML",
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Turn JSON-with-comments into plain JSON.
///
/// `//` and `/* */` comments become spaces (newlines are kept so decoder
/// diagnostics still point at the right line) and trailing commas before a
/// closing `}` or `]` are dropped. String literals are copied verbatim.
pub fn strip_jsonc(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    let mut in_string = false;
    let mut escaped = false;
    let mut pending_comma: Option<usize> = None;

    while let Some(ch) = chars.next() {
        if in_string {
            output.push(ch);
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }

        match ch {
            '"' => {
                pending_comma = None;
                in_string = true;
                output.push(ch);
            }
            '/' if chars.peek() == Some(&'/') => {
                chars.next();
                output.push_str("  ");
                while let Some(&next) = chars.peek() {
                    if next == '\n' {
                        break;
                    }
                    chars.next();
                    output.push(' ');
                }
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                output.push_str("  ");
                let mut previous = '\0';
                for next in chars.by_ref() {
                    let closes = previous == '*' && next == '/';
                    output.push(if next == '\n' { '\n' } else { ' ' });
                    if closes {
                        break;
                    }
                    previous = next;
                }
            }
            ',' => {
                pending_comma = Some(output.len());
                output.push(ch);
            }
            '}' | ']' => {
                if let Some(index) = pending_comma.take() {
                    output.replace_range(index..index + 1, " ");
                }
                output.push(ch);
            }
            ch if ch.is_whitespace() => output.push(ch),
            _ => {
                pending_comma = None;
                output.push(ch);
            }
        }
    }

    output
}
