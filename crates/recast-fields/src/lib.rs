//! # recast-fields — Custom Field Types
//!
//! Convert-then-validate pipelines for domain-specific field values,
//! plugged into record schemas through the [`FieldCheck`] trait from
//! `recast-core`. The materializer invokes the check on every resolved
//! non-null field value; rejections surface as field-scoped validation
//! errors.
//!
//! Provided checks:
//!
//! - [`Color`]: hex strings, RGB triples, and named colors, normalized to
//!   uppercase `#RRGGBB`.
//! - [`PathField`]: filesystem paths with existence, kind, and extension
//!   constraints.

pub mod color;
pub mod path;

// Re-export primary types.
pub use color::Color;
pub use path::PathField;
pub use recast_core::FieldCheck;
