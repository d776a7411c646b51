//! Environment-variable sourcing.
//!
//! Environment variables are modeled as an injected name→string mapping,
//! never as a direct read of ambient process state — the engine stays
//! testable without mutating the real environment. A
//! [`EnvSource::from_process_env`] constructor captures the process
//! environment once, at the edge.
//!
//! Each variable named `PREFIX` + upper-cased field name is coerced
//! toward the field's declared descriptor: comma-separated items for
//! sequences, `k=v,k=v` pairs or an embedded JSON object for mappings,
//! the usual token table for booleans, and `none`/`null` for explicit
//! absence. A string that cannot be coerced is skipped (the field falls
//! back to file layers or its default) with a warning.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use recast_core::coerce::parse_bool_token;
use recast_core::enums::resolve;
use recast_core::schema::{PrimitiveKind, RecordSchema, TypeDesc};

/// A prefix-filtered view over a name→string environment mapping.
#[derive(Debug, Clone)]
pub struct EnvSource {
    prefix: String,
    vars: BTreeMap<String, String>,
}

impl EnvSource {
    /// Build a source over an explicit variable mapping.
    pub fn new(prefix: impl Into<String>, vars: BTreeMap<String, String>) -> Self {
        Self {
            prefix: prefix.into(),
            vars,
        }
    }

    /// Capture the current process environment.
    pub fn from_process_env(prefix: impl Into<String>) -> Self {
        Self::new(prefix, std::env::vars().collect())
    }

    /// Collect the variables addressing `schema`'s fields into a plain
    /// mapping, coercing each string toward its field's descriptor.
    pub fn collect(&self, schema: &RecordSchema) -> Map<String, Value> {
        let mut out = Map::new();
        for field in schema.fields() {
            let var_name = format!("{}{}", self.prefix, field.name().to_ascii_uppercase());
            let Some(raw) = self.vars.get(&var_name) else {
                continue;
            };
            match coerce_env_value(raw, field.ty()) {
                Some(value) => {
                    out.insert(field.name().to_string(), value);
                }
                None => {
                    tracing::warn!(
                        var = %var_name,
                        field = field.name(),
                        "environment value not coercible, skipping"
                    );
                }
            }
        }
        out
    }
}

/// Coerce an environment string toward a type descriptor. `None` means
/// the string has no sensible reading under the descriptor and the
/// variable should be ignored.
pub fn coerce_env_value(raw: &str, ty: &TypeDesc) -> Option<Value> {
    match ty {
        TypeDesc::Optional(inner) => {
            if is_null_token(raw) {
                Some(Value::Null)
            } else {
                coerce_env_value(raw, inner)
            }
        }

        TypeDesc::Union(branches) => {
            if is_null_token(raw) {
                return Some(Value::Null);
            }
            for branch in branches {
                if let Some(value) = coerce_env_value(raw, branch) {
                    return Some(value);
                }
            }
            Some(Value::String(raw.to_string()))
        }

        TypeDesc::Sequence(element) => {
            if raw.trim().is_empty() {
                return Some(Value::Array(Vec::new()));
            }
            let mut items = Vec::new();
            for item in raw.split(',') {
                items.push(coerce_env_value(item.trim(), element)?);
            }
            Some(Value::Array(items))
        }

        TypeDesc::Mapping(_, value_ty) => {
            if raw.trim().is_empty() {
                return Some(Value::Object(Map::new()));
            }
            if raw.trim_start().starts_with('{') {
                if let Ok(Value::Object(map)) = serde_json::from_str(raw) {
                    return Some(Value::Object(map));
                }
            }
            let mut out = Map::new();
            for pair in raw.split(',') {
                // Pairs without a separator are skipped, not fatal.
                let Some((key, value)) = pair.split_once('=') else {
                    continue;
                };
                out.insert(
                    key.trim().to_string(),
                    coerce_env_value(value.trim(), value_ty)?,
                );
            }
            Some(Value::Object(out))
        }

        // Nested records only arrive through an embedded JSON object.
        TypeDesc::Record(_) => {
            let trimmed = raw.trim_start();
            if trimmed.starts_with('{') {
                serde_json::from_str(raw).ok().filter(Value::is_object)
            } else {
                None
            }
        }

        TypeDesc::Enum(schema) => resolve(&Value::String(raw.to_string()), schema)
            .ok()
            .map(|member| member.value.clone()),

        TypeDesc::Primitive(kind) => {
            if is_null_token(raw) || raw.is_empty() {
                return Some(Value::Null);
            }
            match kind {
                PrimitiveKind::Bool => parse_bool_token(raw).map(Value::Bool),
                PrimitiveKind::Int => raw.trim().parse::<i64>().ok().map(|i| Value::Number(i.into())),
                PrimitiveKind::Float => raw
                    .trim()
                    .parse::<f64>()
                    .ok()
                    .and_then(serde_json::Number::from_f64)
                    .map(Value::Number),
                PrimitiveKind::Str => Some(Value::String(raw.to_string())),
            }
        }
    }
}

fn is_null_token(raw: &str) -> bool {
    raw.eq_ignore_ascii_case("none") || raw.eq_ignore_ascii_case("null")
}
