//! Format selection by file extension.

use std::path::Path;

use crate::error::FormatError;

/// Extensions recognized by [`Format::from_path`], in dispatch order.
pub const SUPPORTED_EXTENSIONS: &[&str] = &[".json", ".yaml", ".yml", ".toml", ".ini"];

/// A supported textual file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
    Toml,
    Ini,
}

impl Format {
    /// Select the format for `path` from its extension
    /// (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::UnsupportedFormat`] naming the extension and
    /// the supported set when the extension is unknown or absent.
    pub fn from_path(path: &Path) -> Result<Self, FormatError> {
        let extension = path
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy().to_ascii_lowercase()))
            .unwrap_or_default();
        match extension.as_str() {
            ".json" => Ok(Format::Json),
            ".yaml" | ".yml" => Ok(Format::Yaml),
            ".toml" => Ok(Format::Toml),
            ".ini" => Ok(Format::Ini),
            _ => Err(FormatError::UnsupportedFormat { extension }),
        }
    }
}
