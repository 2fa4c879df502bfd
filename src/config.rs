//! Project configuration document handling.
//! This module owns the `themesmith.json` document at the project root and
//! exposes dotted-path access and mutation over it.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde_json::{Map, Value};

use crate::constants::{CONFIG_FILE, MANIFEST_FILE, THEMES_PATH_KEY};
use crate::error::{Error, Result};
use crate::value::{self, ConfigPath, ValueKind};

/// When mutations reach the disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Every `set`/`add` rewrites the whole document.
    #[default]
    Immediate,
    /// Mutations only mark the store dirty; the caller invokes [`ConfigStore::flush`].
    Deferred,
}

/// The configuration document of one project, loaded once per command.
#[derive(Debug)]
pub struct ConfigStore {
    root: PathBuf,
    document: PathBuf,
    params: Value,
    write_mode: WriteMode,
    dirty: bool,
}

/// Finds the project root: the nearest ancestor of `start` (inclusive)
/// containing the project manifest.
///
/// # Errors
/// * `Error::ProjectRootNotFound` if no ancestor holds a manifest
pub fn find_project_root<P: AsRef<Path>>(start: P) -> Result<PathBuf> {
    let start = start.as_ref();
    start
        .ancestors()
        .find(|dir| dir.join(MANIFEST_FILE).is_file())
        .map(Path::to_path_buf)
        .ok_or_else(|| Error::ProjectRootNotFound {
            start: start.display().to_string(),
            manifest: MANIFEST_FILE.to_string(),
        })
}

/// Relative path from the directory of `from_path` back to the project root.
///
/// `from_path` is a slash-separated path relative to the root, e.g.
/// `wp-content/themes/demo/functions.php` gives `../../../`.
pub fn relative_root_path(from_path: &str) -> String {
    let depth = from_path.split('/').count().saturating_sub(1);
    "../".repeat(depth)
}

fn read_document(document: &Path) -> Result<Option<Value>> {
    if !document.is_file() {
        return Ok(None);
    }
    debug!("Loading configuration from {}", document.display());
    let content = fs::read_to_string(document)?;
    if content.trim().is_empty() {
        return Ok(None);
    }
    Ok(Some(serde_json::from_str(&content)?))
}

impl ConfigStore {
    /// Binds a store to the document under `root`, loading it when present.
    ///
    /// # Errors
    /// * `Error::JsonError` if the document is not valid JSON
    /// * `Error::ConfigInvalid` if its root is not a map
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        let document = root.join(CONFIG_FILE);
        let params = match read_document(&document)? {
            Some(params @ Value::Object(_)) => params,
            Some(other) => {
                return Err(Error::ConfigInvalid {
                    path: String::new(),
                    message: format!(
                        "Error: {} must hold a JSON object, found a {}.",
                        document.display(),
                        ValueKind::of(&other)
                    ),
                })
            }
            None => Value::Object(Map::new()),
        };

        Ok(Self {
            root,
            document,
            params,
            write_mode: WriteMode::default(),
            dirty: false,
        })
    }

    /// Opens the store of the project enclosing `start`.
    pub fn discover<P: AsRef<Path>>(start: P) -> Result<Self> {
        Self::open(find_project_root(start)?)
    }

    /// Creates (or replaces) the document under `root` with `document`.
    ///
    /// # Errors
    /// * `Error::ConfigInvalid` if `document` is not a map
    pub fn init<P: AsRef<Path>>(root: P, document: Value) -> Result<Self> {
        if !document.is_object() {
            return Err(Error::ConfigInvalid {
                path: String::new(),
                message: format!(
                    "Error: the initial configuration must be a JSON object, found a {}.",
                    ValueKind::of(&document)
                ),
            });
        }
        let mut store = Self::open(root)?;
        store.params = document;
        store.flush()?;
        Ok(store)
    }

    /// Whether the document file is present on disk.
    pub fn exists(&self) -> bool {
        self.document.is_file()
    }

    pub fn root_path(&self) -> &Path {
        &self.root
    }

    pub fn document_path(&self) -> &Path {
        &self.document
    }

    pub fn write_mode(&self) -> WriteMode {
        self.write_mode
    }

    pub fn set_write_mode(&mut self, mode: WriteMode) {
        self.write_mode = mode;
    }

    /// Whether there are mutations not yet written to disk.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// The whole in-memory tree.
    pub fn params(&self) -> &Value {
        &self.params
    }

    /// Value at `path`, or `Value::Null` when the path is absent.
    pub fn get(&self, path: &ConfigPath) -> &Value {
        value::lookup(&self.params, path).unwrap_or(&Value::Null)
    }

    /// Value at `path`, which must be present and non-empty.
    ///
    /// # Errors
    /// * `Error::ConfigMissing` if the path is absent or null
    /// * `Error::ConfigInvalid` if it holds an empty string
    pub fn get_strict(&self, path: &ConfigPath) -> Result<&Value> {
        self.check(path, None, None)?;
        Ok(self.get(path))
    }

    /// Value at `path`, which must be present, non-empty and of kind `kind`.
    ///
    /// `message` replaces the default error message when given.
    pub fn get_as(&self, path: &ConfigPath, kind: ValueKind, message: Option<&str>) -> Result<&Value> {
        self.check(path, Some(kind), message)?;
        Ok(self.get(path))
    }

    /// String at `path`, which must be present and non-empty.
    pub fn get_str(&self, path: &ConfigPath) -> Result<&str> {
        let value = self.get_as(path, ValueKind::String, None)?;
        Ok(value.as_str().unwrap_or_default())
    }

    fn default_message(&self, path: &ConfigPath) -> String {
        format!(
            "Error: the required param '{}' is missing or invalid in {}. Please fix your configuration file in order to continue.",
            path,
            self.document.display()
        )
    }

    /// Validates the value at `path`.
    ///
    /// Fails when the value is absent, an empty string, or not of kind
    /// `expected`. The error message is exactly `message` when supplied.
    ///
    /// # Errors
    /// * `Error::ConfigMissing` for an absent or null value
    /// * `Error::ConfigInvalid` for an empty string or a kind mismatch
    pub fn check(&self, path: &ConfigPath, expected: Option<ValueKind>, message: Option<&str>) -> Result<bool> {
        let error_message = || message.map_or_else(|| self.default_message(path), str::to_string);
        let value = self.get(path);

        if value.is_null() {
            return Err(Error::ConfigMissing {
                path: path.to_string(),
                message: error_message(),
            });
        }
        let empty_string = value.as_str().is_some_and(str::is_empty);
        let wrong_kind = expected.is_some_and(|kind| !kind.matches(value));
        if empty_string || wrong_kind {
            return Err(Error::ConfigInvalid {
                path: path.to_string(),
                message: error_message(),
            });
        }
        Ok(true)
    }

    /// Assigns `value` at `path`, creating intermediate maps as needed.
    pub fn set(&mut self, path: &ConfigPath, value: Value) -> Result<()> {
        debug!("Setting '{}'", path);
        value::assign(&mut self.params, path, value);
        self.touch()
    }

    /// Appends `value` to the array at `path`.
    ///
    /// Scalars already present are not appended twice; maps and arrays are
    /// always appended.
    ///
    /// # Returns
    /// * `Result<bool>` - whether the array changed
    ///
    /// # Errors
    /// * `Error::ConfigType` if the path holds a non-array value
    pub fn add(&mut self, path: &ConfigPath, value: Value) -> Result<bool> {
        let appended = value::append(&mut self.params, path, value)?;
        if appended {
            debug!("Appended a value to '{}'", path);
        } else {
            debug!("'{}' already holds that value", path);
        }
        self.touch()?;
        Ok(appended)
    }

    fn touch(&mut self) -> Result<()> {
        self.dirty = true;
        match self.write_mode {
            WriteMode::Immediate => self.flush(),
            WriteMode::Deferred => Ok(()),
        }
    }

    /// Rewrites the whole document from the in-memory tree.
    pub fn flush(&mut self) -> Result<()> {
        debug!("Writing configuration to {}", self.document.display());
        let content = value::to_document_string(&self.params)?;
        if let Some(parent) = self.document.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.document, content)?;
        self.dirty = false;
        Ok(())
    }

    /// Directory of `theme` under the configured `themes-path`.
    ///
    /// # Errors
    /// * `Error::ConfigMissing`/`Error::ConfigInvalid` if `themes-path` is not set
    pub fn theme_path(&self, theme: &str) -> Result<PathBuf> {
        let themes_path = self.get_str(&ConfigPath::parse(THEMES_PATH_KEY)?)?;
        Ok(self.root.join(themes_path).join(theme))
    }
}
