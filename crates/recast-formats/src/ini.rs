//! Minimal INI reader/writer.
//!
//! Follows the classic configparser model: `[section]` headers become
//! nested objects, keys in the `[DEFAULT]` section (or before any header)
//! land at the top level, and every value is a string — downstream schema
//! coercion turns them into typed values. `;` and `#` start comment
//! lines; `=` and `:` both separate keys from values.

use serde_json::{Map, Value};

/// Parse INI text into a mapping.
///
/// # Errors
///
/// Returns `(line number, detail)` for unterminated section headers and
/// non-comment lines without a key/value separator.
pub fn parse(content: &str) -> Result<Map<String, Value>, (usize, String)> {
    let mut top = Map::new();
    let mut sections: Vec<(String, Map<String, Value>)> = Vec::new();
    let mut current: Option<usize> = None;

    for (idx, raw_line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
            continue;
        }

        if let Some(rest) = line.strip_prefix('[') {
            let name = rest
                .strip_suffix(']')
                .ok_or((line_no, "unterminated section header".to_string()))?
                .trim();
            if name.eq_ignore_ascii_case("DEFAULT") {
                current = None;
            } else {
                sections.push((name.to_string(), Map::new()));
                current = Some(sections.len() - 1);
            }
            continue;
        }

        let sep = line
            .find(['=', ':'])
            .ok_or((line_no, format!("expected 'key = value', got {line:?}")))?;
        let key = line[..sep].trim().to_string();
        let value = Value::String(line[sep + 1..].trim().to_string());
        match current {
            Some(i) => {
                sections[i].1.insert(key, value);
            }
            None => {
                top.insert(key, value);
            }
        }
    }

    for (name, body) in sections {
        top.insert(name, Value::Object(body));
    }
    Ok(top)
}

/// Render a mapping as INI text.
///
/// Object-valued fields become sections; everything else goes into
/// `[DEFAULT]`. Non-string scalars are written in their JSON spelling,
/// which the string-typed reader plus schema coercion round-trips.
pub fn write(data: &Map<String, Value>) -> String {
    let mut out = String::new();

    let scalars: Vec<_> = data.iter().filter(|(_, v)| !v.is_object()).collect();
    if !scalars.is_empty() {
        out.push_str("[DEFAULT]\n");
        for (key, value) in scalars {
            out.push_str(&format!("{key} = {}\n", scalar_text(value)));
        }
    }

    for (name, value) in data.iter() {
        if let Value::Object(body) = value {
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str(&format!("[{name}]\n"));
            for (key, entry) in body {
                out.push_str(&format!("{key} = {}\n", scalar_text(entry)));
            }
        }
    }

    out
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
