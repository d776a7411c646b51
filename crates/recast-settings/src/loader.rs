//! Layered settings assembly.
//!
//! A [`Settings`] builder names the layers, lowest precedence first:
//! discovered or explicit config files, then environment variables, then
//! explicit overrides. [`Settings::load`] folds the layers into one
//! mapping and materializes the target record through its schema, so
//! every layer gets the same coercion and defaulting treatment as any
//! other input.

use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use recast_core::schema::FieldDefault;
use recast_core::Record;
use recast_formats::{load_value, save_value, FormatError, SUPPORTED_EXTENSIONS};

use crate::env::EnvSource;
use crate::error::SettingsError;
use crate::merge::{merge_into, MergeStrategy};

/// Builder for loading a record from layered configuration sources.
pub struct Settings<T: Record> {
    paths: Vec<PathBuf>,
    config_name: Option<String>,
    search_dirs: Vec<PathBuf>,
    env: Option<EnvSource>,
    overrides: Map<String, Value>,
    strategy: MergeStrategy,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Record> Default for Settings<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> Settings<T> {
    /// Start with no sources configured.
    pub fn new() -> Self {
        Self {
            paths: Vec::new(),
            config_name: None,
            search_dirs: Vec::new(),
            env: None,
            overrides: Map::new(),
            strategy: MergeStrategy::Deep,
            _marker: PhantomData,
        }
    }

    /// Add an explicit config file path. Files are merged in the order
    /// given; later files win.
    pub fn config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.paths.push(path.into());
        self
    }

    /// Set a base name (no extension) to discover in the search
    /// directories, probing every supported extension.
    pub fn config_name(mut self, name: impl Into<String>) -> Self {
        self.config_name = Some(name.into());
        self
    }

    /// Add a directory to probe during name-based discovery. Directories
    /// are probed in the order given; later matches win.
    pub fn search_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.search_dirs.push(dir.into());
        self
    }

    /// Layer environment variables over the file layers.
    pub fn env(mut self, source: EnvSource) -> Self {
        self.env = Some(source);
        self
    }

    /// Set a single top-level key unconditionally; overrides beat every
    /// other layer.
    pub fn override_value(mut self, key: impl Into<String>, value: Value) -> Self {
        self.overrides.insert(key.into(), value);
        self
    }

    /// Replace later layers' nested objects wholesale instead of merging
    /// into them.
    pub fn shallow_merge(mut self) -> Self {
        self.strategy = MergeStrategy::Shallow;
        self
    }

    /// Fold all layers and materialize the record.
    ///
    /// Files merge lowest precedence first, then the environment, then
    /// overrides; within the file group, later entries win. Name-based
    /// discovery runs only when no explicit paths were given. A file
    /// that is missing, unparseable, or not a mapping is skipped with a
    /// warning so a broken layer never takes the whole stack down.
    ///
    /// # Errors
    ///
    /// [`SettingsError::Convert`] if the merged mapping does not
    /// materialize into `T`.
    pub fn load(self) -> Result<T, SettingsError> {
        let mut merged = Map::new();

        let paths = if self.paths.is_empty() {
            self.discovered_paths()
        } else {
            self.paths.clone()
        };
        for path in paths {
            match load_value(&path) {
                Ok(Value::Object(map)) => merge_into(&mut merged, map, self.strategy),
                Ok(_) => {
                    tracing::warn!(path = %path.display(), "config file is not a mapping, skipping");
                }
                Err(FormatError::FileNotFound { .. }) => {
                    tracing::debug!(path = %path.display(), "config file absent, skipping");
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "config file failed to load, skipping");
                }
            }
        }

        if let Some(env) = &self.env {
            merge_into(&mut merged, env.collect(T::schema()), self.strategy);
        }

        merge_into(&mut merged, self.overrides, self.strategy);

        Ok(T::from_dict(merged)?)
    }

    fn discovered_paths(&self) -> Vec<PathBuf> {
        let Some(name) = &self.config_name else {
            return Vec::new();
        };
        let mut found = Vec::new();
        for dir in &self.search_dirs {
            for ext in SUPPORTED_EXTENSIONS {
                let candidate = dir.join(format!("{name}{ext}"));
                if candidate.is_file() {
                    found.push(candidate);
                }
            }
        }
        found
    }
}

/// Save a record as a settings file.
///
/// With `include_defaults` false, fields whose serialized value equals
/// their declared default are omitted, so the file names only what the
/// user changed. Required fields and fields without a usable default are
/// always written.
pub fn save_settings<T: Record>(
    record: &T,
    path: &Path,
    include_defaults: bool,
) -> Result<(), SettingsError> {
    let mut map = record.to_dict()?;
    if !include_defaults {
        map.retain(|name, value| match T::schema().field(name).map(|f| f.default()) {
            Some(FieldDefault::Value(default)) => value != default,
            Some(FieldDefault::Factory(factory)) => *value != factory(),
            _ => true,
        });
    }
    save_value(&Value::Object(map), path)?;
    Ok(())
}
