//! # recast-settings — Layered Configuration
//!
//! Assembles a record from stacked configuration sources: config files
//! (explicit paths or name-based discovery), prefix-filtered environment
//! variables, and explicit overrides, in that precedence order. Every
//! layer reduces to a plain mapping and the final stack materializes
//! through the record's schema, so file text, environment strings, and
//! override values all receive the same coercion and defaulting.
//!
//! ## Layer semantics
//!
//! Files merge deeply by default (nested objects combine key-wise); a
//! shallow mode replaces nested objects wholesale. Environment variables
//! address top-level fields only, as `PREFIX` + upper-cased field name,
//! and are coerced toward the field's declared type before merging.

pub mod env;
pub mod error;
pub mod loader;
pub mod merge;

// Re-export primary types.
pub use env::EnvSource;
pub use error::SettingsError;
pub use loader::{save_settings, Settings};
pub use merge::MergeStrategy;
