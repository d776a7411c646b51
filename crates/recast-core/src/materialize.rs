//! # Record Materializer
//!
//! Resolves a name→value mapping against a record schema: present fields
//! go through the schema walker, missing fields through their default
//! policy, and fields carrying a custom check through the
//! convert-then-validate pipeline. The output is a fully resolved field
//! mapping ready for the record type's own constructor.

use serde_json::{Map, Value};

use crate::convert::{convert, Coercion};
use crate::error::{join_path, ConvertError};
use crate::schema::{FieldDefault, RecordSchema};

/// Materialize `data` against `schema`, producing the resolved field
/// mapping.
///
/// Fields are processed in declaration order. Keys in `data` that name no
/// declared field are ignored.
///
/// # Errors
///
/// - [`ConvertError::MissingRequiredField`] when a field without a default
///   is absent from `data`.
/// - [`ConvertError::FieldValidation`] when a field's custom check rejects
///   its resolved value.
/// - Any walker failure for a present field, with the field's dotted path.
pub fn materialize(
    data: Map<String, Value>,
    schema: &RecordSchema,
    policy: Coercion,
) -> Result<Map<String, Value>, ConvertError> {
    materialize_at(data, schema, "", policy)
}

/// Materialize with a dotted path prefix for nested-record error scoping.
pub(crate) fn materialize_at(
    mut data: Map<String, Value>,
    schema: &RecordSchema,
    path: &str,
    policy: Coercion,
) -> Result<Map<String, Value>, ConvertError> {
    let mut resolved = Map::with_capacity(schema.fields().len());

    for field in schema.fields() {
        let field_path = join_path(path, field.name());

        let value = match data.remove(field.name()) {
            Some(raw) => convert(raw, field.ty(), &field_path, policy)?,
            None => match field.default() {
                FieldDefault::Required => {
                    return Err(ConvertError::MissingRequiredField { field: field_path })
                }
                // Defaults are assumed already well-typed; stored verbatim.
                FieldDefault::Value(v) => v.clone(),
                // Factories run fresh per occurrence, never shared.
                FieldDefault::Factory(factory) => factory(),
            },
        };

        let value = match field.check() {
            Some(check) if !value.is_null() => {
                let normalized = check.convert(field.name(), value);
                check
                    .validate(field.name(), &normalized)
                    .map_err(|reason| ConvertError::FieldValidation {
                        field: field_path.clone(),
                        reason,
                    })?;
                normalized
            }
            _ => value,
        };

        resolved.insert(field.name().to_string(), value);
    }

    Ok(resolved)
}
