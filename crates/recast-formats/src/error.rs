//! File-format error types.
//!
//! All errors carry the file path involved so callers can report which
//! configuration file failed without extra bookkeeping.

use std::path::PathBuf;

use thiserror::Error;

use crate::format::SUPPORTED_EXTENSIONS;

/// Errors that can occur while loading or saving record files.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The file extension names no supported format.
    #[error("unsupported file format: {extension:?} (supported: {})", SUPPORTED_EXTENSIONS.join(", "))]
    UnsupportedFormat {
        /// The offending extension, including the leading dot (empty when
        /// the path has none).
        extension: String,
    },

    /// A load was requested from a non-existent path.
    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// JSON parsing failed.
    #[error("failed to parse JSON at {}: {source}", path.display())]
    JsonParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// YAML parsing failed.
    #[error("failed to parse YAML at {}: {source}", path.display())]
    YamlParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// TOML parsing failed.
    #[error("failed to parse TOML at {}: {source}", path.display())]
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// INI parsing failed.
    #[error("failed to parse INI at {} (line {line}): {detail}", path.display())]
    IniParse {
        path: PathBuf,
        line: usize,
        detail: String,
    },

    /// The value cannot be represented in the target format.
    #[error("cannot write {}: {detail}", path.display())]
    Unwritable { path: PathBuf, detail: String },

    /// Conversion of loaded data into the record type failed.
    #[error(transparent)]
    Convert(#[from] recast_core::ConvertError),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
