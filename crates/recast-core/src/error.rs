//! Conversion error types.
//!
//! Structured errors for schema-directed conversion. Every error carries
//! the dotted field path of the failure site (`address.zip_code`,
//! `servers[2].port`) so callers can report the exact location inside a
//! nested document.

use serde_json::Value;
use thiserror::Error;

/// Errors that can occur while converting raw values into typed records.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// A field with no default was absent from the input mapping.
    #[error("missing required field: {field}")]
    MissingRequiredField {
        /// Dotted path of the absent field.
        field: String,
    },

    /// Strict-mode primitive coercion failed.
    #[error("field '{field_path}' expects {expected}, got {value}")]
    TypeMismatch {
        /// Dotted path of the offending field.
        field_path: String,
        /// Human-readable description of the expected type.
        expected: String,
        /// The raw value that could not be coerced.
        value: Value,
    },

    /// No enumeration member matched the raw value by value or by name.
    #[error("cannot convert {value} to {enum_name}")]
    EnumResolution {
        /// The raw value that failed to resolve.
        value: Value,
        /// Name of the target enumeration.
        enum_name: String,
    },

    /// A custom field check rejected a normalized value.
    #[error("invalid value for {field}: {reason}")]
    FieldValidation {
        /// Dotted path of the rejected field.
        field: String,
        /// Human-readable rejection reason from the check.
        reason: String,
    },

    /// The host record type refused the resolved field mapping.
    #[error("failed to construct {type_name}: {detail}")]
    Construction {
        /// Name of the record type being built.
        type_name: String,
        /// Human-readable reason from the constructor.
        detail: String,
    },
}

/// Join a field name onto a dotted path prefix.
///
/// An empty prefix yields the bare field name, so top-level errors read
/// `port` rather than `.port`.
pub(crate) fn join_path(prefix: &str, field: &str) -> String {
    if prefix.is_empty() {
        field.to_string()
    } else {
        format!("{prefix}.{field}")
    }
}
