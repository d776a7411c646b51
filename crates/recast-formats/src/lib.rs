//! # recast-formats — File Load/Save
//!
//! Extension-dispatched loading and saving of record files in JSON, YAML,
//! TOML, and INI. All formats parse into a `serde_json::Value` mapping,
//! so the conversion engine sees one value model regardless of source:
//! YAML and TOML bridge through [`bridge`], INI text (where every value
//! is a string) relies on schema coercion downstream.
//!
//! Unsupported extensions, missing files, and parse failures are hard,
//! per-operation errors — a failed save never leaves a partial file
//! behind, and parent directories are created before any write.

pub mod bridge;
pub mod error;
pub mod format;
pub mod ini;
pub mod io;

// Re-export primary types.
pub use error::FormatError;
pub use format::{Format, SUPPORTED_EXTENSIONS};
pub use io::{load_record, load_value, save_record, save_value};
