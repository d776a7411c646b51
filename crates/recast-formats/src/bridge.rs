//! Value-model bridging.
//!
//! YAML and TOML parse into their own value models; everything downstream
//! of the parsers works over `serde_json::Value`. Parsing to the native
//! model and bridging keeps one conversion pipeline regardless of the
//! source format.

use serde_json::{Map, Number, Value};

/// Convert a `serde_yaml::Value` to a `serde_json::Value`.
///
/// Non-string mapping keys are folded to their string form; YAML tags are
/// stripped to their inner value.
pub fn yaml_to_json(yaml: serde_yaml::Value) -> Value {
    match yaml {
        serde_yaml::Value::Null => Value::Null,
        serde_yaml::Value::Bool(b) => Value::Bool(b),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Number(Number::from(i))
            } else if let Some(u) = n.as_u64() {
                Value::Number(Number::from(u))
            } else {
                n.as_f64()
                    .and_then(Number::from_f64)
                    .map(Value::Number)
                    .unwrap_or(Value::Null)
            }
        }
        serde_yaml::Value::String(s) => Value::String(s),
        serde_yaml::Value::Sequence(items) => {
            Value::Array(items.into_iter().map(yaml_to_json).collect())
        }
        serde_yaml::Value::Mapping(entries) => {
            let mut map = Map::with_capacity(entries.len());
            for (key, value) in entries {
                let key = match key {
                    serde_yaml::Value::String(s) => s,
                    serde_yaml::Value::Bool(b) => b.to_string(),
                    serde_yaml::Value::Number(n) => n.to_string(),
                    other => yaml_to_json(other).to_string(),
                };
                map.insert(key, yaml_to_json(value));
            }
            Value::Object(map)
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_json(tagged.value),
    }
}

/// Convert a `toml::Value` to a `serde_json::Value`.
///
/// TOML datetimes become their string representation.
pub fn toml_to_json(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::Number(Number::from(i)),
        toml::Value::Float(f) => Number::from_f64(f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Array(items.into_iter().map(toml_to_json).collect()),
        toml::Value::Table(entries) => {
            let mut map = Map::with_capacity(entries.len());
            for (key, value) in entries {
                map.insert(key, toml_to_json(value));
            }
            Value::Object(map)
        }
    }
}

/// Convert a `serde_json::Value` to a `toml::Value`.
///
/// TOML has no null: null table entries are dropped, any other null is
/// reported via `Err` with a path-ish description.
pub fn json_to_toml(value: &Value) -> Result<Option<toml::Value>, String> {
    Ok(Some(match value {
        Value::Null => return Ok(None),
        Value::Bool(b) => toml::Value::Boolean(*b),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                toml::Value::Integer(i)
            } else if let Some(f) = n.as_f64() {
                toml::Value::Float(f)
            } else {
                return Err(format!("number {n} not representable in TOML"));
            }
        }
        Value::String(s) => toml::Value::String(s.clone()),
        Value::Array(items) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                match json_to_toml(item)? {
                    Some(v) => out.push(v),
                    None => return Err("null inside an array is not representable in TOML".to_string()),
                }
            }
            toml::Value::Array(out)
        }
        Value::Object(entries) => {
            let mut table = toml::map::Map::with_capacity(entries.len());
            for (key, entry) in entries {
                // Null entries are simply omitted.
                if let Some(v) = json_to_toml(entry)? {
                    table.insert(key.clone(), v);
                }
            }
            toml::Value::Table(table)
        }
    }))
}
