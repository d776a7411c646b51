//! Filesystem path field type.
//!
//! Normalizes string values into absolute path strings and validates
//! existence, kind (file vs directory), and extension constraints.

use std::path::{Path, PathBuf};

use serde_json::Value;

use recast_core::FieldCheck;

/// Field check for filesystem paths.
///
/// Options are set builder-style:
///
/// ```ignore
/// RecordSchema::builder("AppConfig")
///     .field("data_dir", TypeDesc::str())
///     .check(PathField::new().dir().create_parents())
/// ```
#[derive(Debug, Clone)]
pub struct PathField {
    must_exist: bool,
    is_file: bool,
    is_dir: bool,
    extensions: Vec<String>,
    expanduser: bool,
    resolve: bool,
    create_parents: bool,
}

impl Default for PathField {
    fn default() -> Self {
        Self::new()
    }
}

impl PathField {
    /// A path field with default options: `~` expansion and resolution to
    /// an absolute path, no existence or kind constraints.
    pub fn new() -> Self {
        Self {
            must_exist: false,
            is_file: false,
            is_dir: false,
            extensions: Vec::new(),
            expanduser: true,
            resolve: true,
            create_parents: false,
        }
    }

    /// Require the path to exist at validation time.
    pub fn must_exist(mut self) -> Self {
        self.must_exist = true;
        self
    }

    /// Require the path to be a regular file (when it exists).
    ///
    /// # Panics
    ///
    /// Panics if the field was already constrained to be a directory.
    pub fn file(mut self) -> Self {
        assert!(!self.is_dir, "path cannot be both file and directory");
        self.is_file = true;
        self
    }

    /// Require the path to be a directory (when it exists).
    ///
    /// # Panics
    ///
    /// Panics if the field was already constrained to be a file.
    pub fn dir(mut self) -> Self {
        assert!(!self.is_file, "path cannot be both file and directory");
        self.is_dir = true;
        self
    }

    /// Restrict file extensions (e.g. `[".json", ".yaml"]`).
    pub fn extensions(mut self, extensions: &[&str]) -> Self {
        self.extensions = extensions.iter().map(|e| (*e).to_string()).collect();
        self
    }

    /// Keep relative paths relative.
    pub fn no_resolve(mut self) -> Self {
        self.resolve = false;
        self
    }

    /// Leave a leading `~` untouched.
    pub fn no_expanduser(mut self) -> Self {
        self.expanduser = false;
        self
    }

    /// Create missing parent directories during conversion (the path's own
    /// directory when the field is a directory).
    pub fn create_parents(mut self) -> Self {
        self.create_parents = true;
        self
    }

    fn normalize(&self, raw: &str) -> PathBuf {
        let mut path = PathBuf::from(raw);

        if self.expanduser {
            if let Some(rest) = raw.strip_prefix("~/").or(match raw {
                "~" => Some(""),
                _ => None,
            }) {
                if let Some(home) = dirs::home_dir() {
                    path = home.join(rest);
                }
            }
        }

        if self.resolve && path.is_relative() {
            if let Ok(cwd) = std::env::current_dir() {
                path = cwd.join(path);
            }
        }

        if self.create_parents && !path.exists() {
            let target = if self.is_dir {
                Some(path.as_path())
            } else {
                path.parent()
            };
            if let Some(target) = target {
                // Creation failures surface later via must_exist/kind checks.
                let _ = std::fs::create_dir_all(target);
            }
        }

        path
    }

    fn check_path(&self, field: &str, path: &Path) -> Result<(), String> {
        if self.must_exist && !path.exists() {
            return Err(format!("{field} does not exist: {}", path.display()));
        }

        // Kind and extension constraints only apply to existing paths.
        if !path.exists() {
            return Ok(());
        }

        if self.is_file && !path.is_file() {
            return Err(format!("{field} must be a file: {}", path.display()));
        }
        if self.is_dir && !path.is_dir() {
            return Err(format!("{field} must be a directory: {}", path.display()));
        }

        if !self.extensions.is_empty() && path.is_file() {
            let suffix = path
                .extension()
                .map(|e| format!(".{}", e.to_string_lossy()))
                .unwrap_or_default();
            if !self.extensions.contains(&suffix) {
                return Err(format!(
                    "{field} must have extension in {:?}, got {suffix:?}",
                    self.extensions
                ));
            }
        }

        Ok(())
    }
}

impl FieldCheck for PathField {
    fn convert(&self, _field: &str, value: Value) -> Value {
        match &value {
            Value::String(s) => Value::String(self.normalize(s).to_string_lossy().into_owned()),
            _ => value,
        }
    }

    fn validate(&self, field: &str, value: &Value) -> Result<(), String> {
        let Value::String(s) = value else {
            return Err(format!("{field} must be a string path, got {value}"));
        };
        self.check_path(field, Path::new(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn relative_paths_resolve_to_absolute() {
        let check = PathField::new();
        let out = check.convert("p", json!("some/relative/file.txt"));
        let s = out.as_str().unwrap();
        assert!(Path::new(s).is_absolute());
        assert!(s.ends_with("file.txt"));
    }

    #[test]
    fn no_resolve_keeps_relative() {
        let check = PathField::new().no_resolve();
        let out = check.convert("p", json!("some/relative/file.txt"));
        assert_eq!(out, json!("some/relative/file.txt"));
    }

    #[test]
    fn must_exist_rejects_missing() {
        let check = PathField::new().must_exist();
        let err = check
            .validate("p", &json!("/definitely/not/a/real/path"))
            .unwrap_err();
        assert!(err.contains("does not exist"));
    }

    #[test]
    fn kind_checks_against_real_paths() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("data.json");
        std::fs::write(&file_path, "{}").unwrap();
        let dir_value = json!(dir.path().to_string_lossy());
        let file_value = json!(file_path.to_string_lossy());

        assert!(PathField::new().dir().validate("p", &dir_value).is_ok());
        assert!(PathField::new().file().validate("p", &dir_value).is_err());
        assert!(PathField::new().file().validate("p", &file_value).is_ok());
    }

    #[test]
    fn extension_constraint() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("notes.txt");
        std::fs::write(&file_path, "x").unwrap();
        let value = json!(file_path.to_string_lossy());

        assert!(PathField::new()
            .extensions(&[".txt", ".md"])
            .validate("p", &value)
            .is_ok());
        let err = PathField::new()
            .extensions(&[".json"])
            .validate("p", &value)
            .unwrap_err();
        assert!(err.contains(".json"));
    }

    #[test]
    fn create_parents_makes_directories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a/b/c/file.log");
        let check = PathField::new().create_parents();
        check.convert("p", json!(nested.to_string_lossy()));
        assert!(nested.parent().unwrap().is_dir());
    }

    #[test]
    #[should_panic(expected = "both file and directory")]
    fn file_and_dir_conflict_panics() {
        let _ = PathField::new().file().dir();
    }

    #[test]
    fn non_string_fails_validation() {
        assert!(PathField::new().validate("p", &json!(42)).is_err());
    }
}
