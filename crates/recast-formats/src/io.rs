//! Load and save entry points.
//!
//! The contract with the conversion engine is narrow: loading produces a
//! plain mapping which the engine materializes; saving reduces a record
//! to a plain mapping and renders it. Parent directories are created
//! before writing; the write itself is a single operation, never partial.

use std::path::Path;

use serde_json::{Map, Value};

use recast_core::Record;

use crate::bridge::{json_to_toml, toml_to_json, yaml_to_json};
use crate::error::FormatError;
use crate::format::Format;
use crate::ini;

/// Load a file into a plain mapping value, dispatching on extension.
///
/// # Errors
///
/// [`FormatError::FileNotFound`] for missing files,
/// [`FormatError::UnsupportedFormat`] for unknown extensions, and the
/// format-specific parse variants otherwise.
pub fn load_value(path: &Path) -> Result<Value, FormatError> {
    let format = Format::from_path(path)?;
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            FormatError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            FormatError::Io(e)
        }
    })?;
    tracing::debug!(path = %path.display(), ?format, "loading record file");

    match format {
        Format::Json => serde_json::from_str(&content).map_err(|e| FormatError::JsonParse {
            path: path.to_path_buf(),
            source: e,
        }),
        Format::Yaml => {
            let yaml: serde_yaml::Value =
                serde_yaml::from_str(&content).map_err(|e| FormatError::YamlParse {
                    path: path.to_path_buf(),
                    source: e,
                })?;
            Ok(yaml_to_json(yaml))
        }
        Format::Toml => {
            let parsed: toml::Value =
                toml::from_str(&content).map_err(|e| FormatError::TomlParse {
                    path: path.to_path_buf(),
                    source: e,
                })?;
            Ok(toml_to_json(parsed))
        }
        Format::Ini => {
            let map = ini::parse(&content).map_err(|(line, detail)| FormatError::IniParse {
                path: path.to_path_buf(),
                line,
                detail,
            })?;
            Ok(Value::Object(map))
        }
    }
}

/// Render `value` in the format named by the path's extension and write
/// it, creating parent directories first.
pub fn save_value(value: &Value, path: &Path) -> Result<(), FormatError> {
    let format = Format::from_path(path)?;

    let rendered = match format {
        Format::Json => {
            let mut text = serde_json::to_string_pretty(value).map_err(|e| {
                FormatError::Unwritable {
                    path: path.to_path_buf(),
                    detail: e.to_string(),
                }
            })?;
            text.push('\n');
            text
        }
        Format::Yaml => serde_yaml::to_string(value).map_err(|e| FormatError::Unwritable {
            path: path.to_path_buf(),
            detail: e.to_string(),
        })?,
        Format::Toml => {
            let toml_value = json_to_toml(value)
                .map_err(|detail| FormatError::Unwritable {
                    path: path.to_path_buf(),
                    detail,
                })?
                .ok_or_else(|| FormatError::Unwritable {
                    path: path.to_path_buf(),
                    detail: "top-level value is null".to_string(),
                })?;
            if !toml_value.is_table() {
                return Err(FormatError::Unwritable {
                    path: path.to_path_buf(),
                    detail: "top-level TOML value must be a table".to_string(),
                });
            }
            toml::to_string_pretty(&toml_value).map_err(|e| FormatError::Unwritable {
                path: path.to_path_buf(),
                detail: e.to_string(),
            })?
        }
        Format::Ini => match value {
            Value::Object(map) => ini::write(map),
            other => {
                return Err(FormatError::Unwritable {
                    path: path.to_path_buf(),
                    detail: format!("top-level INI value must be a mapping, got {other}"),
                })
            }
        },
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    tracing::debug!(path = %path.display(), ?format, "writing record file");
    std::fs::write(path, rendered)?;
    Ok(())
}

/// Load a record instance from a file.
pub fn load_record<T: Record>(path: &Path) -> Result<T, FormatError> {
    let value = load_value(path)?;
    match value {
        Value::Object(map) => Ok(T::from_dict(map)?),
        other => Err(FormatError::Convert(recast_core::ConvertError::Construction {
            type_name: T::schema().name().to_string(),
            detail: format!("file did not contain a mapping, got {other}"),
        })),
    }
}

/// Save a record instance to a file.
pub fn save_record<T: Record>(record: &T, path: &Path) -> Result<(), FormatError> {
    let map: Map<String, Value> = record.to_dict()?;
    save_value(&Value::Object(map), path)
}
