//! # Enumeration Resolver
//!
//! Resolves a raw value into a member of a closed enumeration. The order
//! of attempts is significant:
//!
//! 1. exact match against each member's wire value,
//! 2. case-insensitive match against each member's declared name (strings
//!    only).
//!
//! Value matching runs first, so an enumeration whose wire values are
//! strings that collide with another member's name resolves by value.
//! An already-resolved value trivially passes step 1 — resolution is
//! idempotent.

use serde_json::Value;

use crate::error::ConvertError;
use crate::schema::{EnumMember, EnumSchema};

/// Resolve `value` to a member of `schema`.
///
/// # Errors
///
/// Returns [`ConvertError::EnumResolution`] naming the attempted value and
/// the enumeration when no member matches by value or name.
pub fn resolve<'a>(value: &Value, schema: &'a EnumSchema) -> Result<&'a EnumMember, ConvertError> {
    for member in schema.members() {
        if member.value == *value {
            return Ok(member);
        }
    }

    if let Value::String(s) = value {
        for member in schema.members() {
            if member.name.eq_ignore_ascii_case(s) {
                return Ok(member);
            }
        }
    }

    Err(ConvertError::EnumResolution {
        value: value.clone(),
        enum_name: schema.name().to_string(),
    })
}
