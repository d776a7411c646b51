//! # Schema Walker
//!
//! Recursively converts a loosely-typed value against a type descriptor,
//! producing a normalized value or a field-scoped error. Each recursive
//! call consumes one layer of the *input*, so walks terminate even over
//! mutually recursive schema graphs.
//!
//! ## Strictness
//!
//! The walker takes an explicit [`Coercion`] policy. Policy affects
//! primitive and enumeration mismatches only:
//!
//! - [`Coercion::Lenient`] substitutes "leave unchanged" for "fail", so
//!   partially-typed data stays usable for inspection.
//! - [`Coercion::Strict`] raises a [`ConvertError`] carrying the dotted
//!   field path.
//!
//! Sequences, mappings, and unions are lenient under both policies: a
//! non-collection value against a collection descriptor passes through,
//! and a union whose branches all fail yields the original value. Nested
//! record failures always propagate, under either policy.

use serde_json::Value;

use crate::coerce::coerce_primitive;
use crate::enums::resolve;
use crate::error::ConvertError;
use crate::materialize::materialize_at;
use crate::schema::TypeDesc;

/// Conversion policy for primitive and enumeration mismatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coercion {
    /// On mismatch, pass the original value through unchanged.
    Lenient,
    /// On mismatch, fail with a field-scoped error.
    Strict,
}

/// Convert `value` against `target`, reporting failures at dotted path
/// `path`.
///
/// # Errors
///
/// Under [`Coercion::Strict`], primitive and enumeration mismatches return
/// [`ConvertError::TypeMismatch`] / [`ConvertError::EnumResolution`].
/// Nested record failures ([`ConvertError::MissingRequiredField`] and the
/// rest) propagate under both policies.
pub fn convert(
    value: Value,
    target: &TypeDesc,
    path: &str,
    policy: Coercion,
) -> Result<Value, ConvertError> {
    // Null is a valid terminal value for any target; for Optional it
    // short-circuits without recursing into the inner descriptor.
    if value.is_null() {
        return Ok(Value::Null);
    }

    match target {
        TypeDesc::Optional(inner) => convert(value, inner, path, policy),

        TypeDesc::Union(branches) => convert_union(value, branches, path, policy),

        TypeDesc::Sequence(element) => match value {
            Value::Array(items) => {
                let mut out = Vec::with_capacity(items.len());
                for (i, item) in items.into_iter().enumerate() {
                    out.push(convert(item, element, &format!("{path}[{i}]"), policy)?);
                }
                Ok(Value::Array(out))
            }
            // Not an ordered collection: pass through.
            other => Ok(other),
        },

        TypeDesc::Mapping(key_ty, value_ty) => match value {
            Value::Object(entries) => {
                let mut out = serde_json::Map::with_capacity(entries.len());
                for (key, entry) in entries {
                    let key = convert_key(key, key_ty, path, policy)?;
                    let entry = convert(entry, value_ty, &format!("{path}.{key}"), policy)?;
                    out.insert(key, entry);
                }
                Ok(Value::Object(out))
            }
            other => Ok(other),
        },

        TypeDesc::Enum(schema) => match resolve(&value, schema) {
            Ok(member) => Ok(member.value.clone()),
            Err(err) => match policy {
                Coercion::Lenient => Ok(value),
                Coercion::Strict => Err(err),
            },
        },

        TypeDesc::Record(schema) => match value {
            Value::Object(map) => Ok(Value::Object(materialize_at(
                map,
                schema.get(),
                path,
                policy,
            )?)),
            // The absence sentinel (and anything else that is not a
            // mapping) passes through rather than failing.
            other => Ok(other),
        },

        TypeDesc::Primitive(kind) => match coerce_primitive(&value, *kind) {
            Some(coerced) => Ok(coerced),
            None => match policy {
                Coercion::Lenient => Ok(value),
                Coercion::Strict => Err(ConvertError::TypeMismatch {
                    field_path: path.to_string(),
                    expected: kind.name().to_string(),
                    value,
                }),
            },
        },
    }
}

/// Union resolution: a single non-null branch degenerates to Optional;
/// otherwise branches are tried left to right under a strict probe (so
/// failure is observable) and the first success wins. A union is never
/// fatal — if every branch fails, the original value passes through.
fn convert_union(
    value: Value,
    branches: &[TypeDesc],
    path: &str,
    policy: Coercion,
) -> Result<Value, ConvertError> {
    if branches.len() == 1 {
        return convert(value, &branches[0], path, policy);
    }

    for branch in branches {
        match convert(value.clone(), branch, path, Coercion::Strict) {
            Ok(converted) => return Ok(converted),
            Err(_) => continue,
        }
    }
    Ok(value)
}

/// Convert a mapping key. Keys live as strings in the value model, so the
/// converted key is folded back into string form; a key that resolves to
/// a non-scalar keeps its original spelling.
fn convert_key(
    key: String,
    key_ty: &TypeDesc,
    path: &str,
    policy: Coercion,
) -> Result<String, ConvertError> {
    let converted = convert(Value::String(key.clone()), key_ty, path, policy)?;
    Ok(match converted {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => key,
    })
}
