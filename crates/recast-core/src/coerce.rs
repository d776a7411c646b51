//! Primitive coercion.
//!
//! Constructor-style coercion of a raw JSON value toward one of the four
//! primitive kinds. These functions only decide whether a coercion exists;
//! the walker decides what a `None` means under its active policy (pass
//! the original through, or raise a field-scoped mismatch).

use serde_json::{Number, Value};

use crate::schema::PrimitiveKind;

/// Boolean string tokens accepted as `true`, matched case-insensitively.
const TRUE_TOKENS: &[&str] = &["true", "1", "yes", "on", "enabled"];

/// Boolean string tokens accepted as `false`, matched case-insensitively.
const FALSE_TOKENS: &[&str] = &["false", "0", "no", "off"];

/// Parse a boolean token. Empty strings and unrecognized tokens are not
/// booleans.
pub fn parse_bool_token(s: &str) -> Option<bool> {
    let lower = s.trim().to_ascii_lowercase();
    if TRUE_TOKENS.contains(&lower.as_str()) {
        Some(true)
    } else if FALSE_TOKENS.contains(&lower.as_str()) {
        Some(false)
    } else {
        None
    }
}

/// Attempt to coerce `value` to `kind`. Returns `None` when no coercion
/// exists; already-correct values come back unchanged (idempotence).
pub fn coerce_primitive(value: &Value, kind: PrimitiveKind) -> Option<Value> {
    match kind {
        PrimitiveKind::Int => coerce_int(value),
        PrimitiveKind::Float => coerce_float(value),
        PrimitiveKind::Str => coerce_str(value),
        PrimitiveKind::Bool => coerce_bool(value),
    }
}

fn coerce_int(value: &Value) -> Option<Value> {
    match value {
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                Some(value.clone())
            } else {
                // Floats truncate toward zero, whole-number extraction.
                let f = n.as_f64()?;
                if !f.is_finite() {
                    return None;
                }
                let t = f.trunc();
                if t >= i64::MIN as f64 && t <= i64::MAX as f64 {
                    Some(Value::Number(Number::from(t as i64)))
                } else {
                    None
                }
            }
        }
        // Strings must be integer literals; "123.45" is not an int.
        Value::String(s) => {
            let trimmed = s.trim();
            if let Ok(i) = trimmed.parse::<i64>() {
                Some(Value::Number(Number::from(i)))
            } else if let Ok(u) = trimmed.parse::<u64>() {
                Some(Value::Number(Number::from(u)))
            } else {
                None
            }
        }
        _ => None,
    }
}

fn coerce_float(value: &Value) -> Option<Value> {
    match value {
        Value::Number(n) => {
            if n.is_f64() {
                Some(value.clone())
            } else {
                Number::from_f64(n.as_f64()?).map(Value::Number)
            }
        }
        Value::String(s) => {
            let f = s.trim().parse::<f64>().ok()?;
            Number::from_f64(f).map(Value::Number)
        }
        _ => None,
    }
}

fn coerce_str(value: &Value) -> Option<Value> {
    match value {
        Value::String(_) => Some(value.clone()),
        Value::Number(n) => Some(Value::String(n.to_string())),
        Value::Bool(b) => Some(Value::String(b.to_string())),
        _ => None,
    }
}

fn coerce_bool(value: &Value) -> Option<Value> {
    match value {
        Value::Bool(_) => Some(value.clone()),
        // Numbers by truthiness: zero is false, anything else is true.
        Value::Number(n) => n.as_f64().map(|f| Value::Bool(f != 0.0)),
        Value::String(s) => parse_bool_token(s).map(Value::Bool),
        // Sequences by emptiness.
        Value::Array(items) => Some(Value::Bool(!items.is_empty())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bool_token_table() {
        for token in ["true", "1", "yes", "on", "enabled", "TRUE", "Yes", "ON"] {
            assert_eq!(parse_bool_token(token), Some(true), "token {token:?}");
        }
        for token in ["false", "0", "no", "off", "FALSE", "No", "OFF"] {
            assert_eq!(parse_bool_token(token), Some(false), "token {token:?}");
        }
        assert_eq!(parse_bool_token(""), None);
        assert_eq!(parse_bool_token("maybe"), None);
        assert_eq!(parse_bool_token("2"), None);
    }

    #[test]
    fn int_from_integer_string() {
        assert_eq!(
            coerce_primitive(&json!("42"), PrimitiveKind::Int),
            Some(json!(42))
        );
        assert_eq!(
            coerce_primitive(&json!(" -7 "), PrimitiveKind::Int),
            Some(json!(-7))
        );
    }

    #[test]
    fn int_rejects_float_string() {
        assert_eq!(coerce_primitive(&json!("123.45"), PrimitiveKind::Int), None);
        assert_eq!(
            coerce_primitive(&json!("not-a-number"), PrimitiveKind::Int),
            None
        );
    }

    #[test]
    fn int_truncates_float_value() {
        assert_eq!(
            coerce_primitive(&json!(123.45), PrimitiveKind::Int),
            Some(json!(123))
        );
        assert_eq!(
            coerce_primitive(&json!(-2.9), PrimitiveKind::Int),
            Some(json!(-2))
        );
    }

    #[test]
    fn int_rejects_bool_and_collections() {
        assert_eq!(coerce_primitive(&json!(true), PrimitiveKind::Int), None);
        assert_eq!(coerce_primitive(&json!([1, 2]), PrimitiveKind::Int), None);
    }

    #[test]
    fn float_accepts_float_string_and_int() {
        assert_eq!(
            coerce_primitive(&json!("123.45"), PrimitiveKind::Float),
            Some(json!(123.45))
        );
        assert_eq!(
            coerce_primitive(&json!(3), PrimitiveKind::Float),
            Some(json!(3.0))
        );
    }

    #[test]
    fn str_from_scalars_only() {
        assert_eq!(
            coerce_primitive(&json!(123), PrimitiveKind::Str),
            Some(json!("123"))
        );
        assert_eq!(
            coerce_primitive(&json!(true), PrimitiveKind::Str),
            Some(json!("true"))
        );
        assert_eq!(coerce_primitive(&json!([1, 2]), PrimitiveKind::Str), None);
        assert_eq!(coerce_primitive(&json!({}), PrimitiveKind::Str), None);
    }

    #[test]
    fn bool_from_numbers_and_sequences() {
        assert_eq!(
            coerce_primitive(&json!(1), PrimitiveKind::Bool),
            Some(json!(true))
        );
        assert_eq!(
            coerce_primitive(&json!(0), PrimitiveKind::Bool),
            Some(json!(false))
        );
        assert_eq!(
            coerce_primitive(&json!(-1), PrimitiveKind::Bool),
            Some(json!(true))
        );
        assert_eq!(
            coerce_primitive(&json!([1, 2, 3]), PrimitiveKind::Bool),
            Some(json!(true))
        );
        assert_eq!(
            coerce_primitive(&json!([]), PrimitiveKind::Bool),
            Some(json!(false))
        );
    }

    #[test]
    fn bool_rejects_bad_strings() {
        assert_eq!(coerce_primitive(&json!("maybe"), PrimitiveKind::Bool), None);
        assert_eq!(coerce_primitive(&json!(""), PrimitiveKind::Bool), None);
    }
}
