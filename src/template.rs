//! Template models and placeholder substitution.
//! A model is a plain-text file of the model library addressed by a
//! slash-separated identifier (`theme-config`, `timber/page`). Its content
//! carries literal `{ALL_CAPS}` placeholders that builders fill in before
//! the result is written to disk.

use std::fs;
use std::path::{Component, Path, PathBuf};

use indexmap::IndexMap;
use log::debug;

use crate::constants::BOILERPLATES_DIR;
use crate::error::{Error, Result};

/// Ordered placeholder → replacement map.
pub type Placeholders = IndexMap<String, String>;

/// Directory of raw template models.
#[derive(Debug, Clone)]
pub struct ModelLibrary {
    root: PathBuf,
}

impl ModelLibrary {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn not_found(&self, model: &str) -> Error {
        Error::ModelNotFound {
            model: model.to_string(),
            location: self.root.display().to_string(),
        }
    }

    /// Maps a model identifier to its file.
    ///
    /// # Errors
    /// * `Error::ModelNotFound` if the identifier is empty, absolute or
    ///   escapes the library root
    pub fn resolve(&self, model: &str) -> Result<PathBuf> {
        let relative = Path::new(model);
        let well_formed = !model.is_empty()
            && relative
                .components()
                .all(|component| matches!(component, Component::Normal(_)));
        if !well_formed {
            return Err(self.not_found(model));
        }
        Ok(self.root.join(relative))
    }

    pub fn contains(&self, model: &str) -> bool {
        self.resolve(model).is_ok_and(|path| path.is_file())
    }

    /// Reads the raw content of `model`.
    ///
    /// # Errors
    /// * `Error::ModelNotFound` if no such model file exists
    /// * `Error::IoError` if the file exists but cannot be read
    pub fn load(&self, model: &str) -> Result<Template> {
        let path = self.resolve(model)?;
        if !path.is_file() {
            return Err(self.not_found(model));
        }
        debug!("Loading model '{}' from {}", model, path.display());
        let content = fs::read_to_string(&path)?;
        Ok(Template::new(model, content))
    }

    /// Loads `model` and fills every placeholder of `placeholders`.
    pub fn render(&self, model: &str, placeholders: &Placeholders) -> Result<Template> {
        let mut template = self.load(model)?;
        template.fill_all(placeholders);
        Ok(template)
    }

    /// Directory of the boilerplate named `name`.
    pub fn boilerplate_dir(&self, name: &str) -> PathBuf {
        self.root.join(BOILERPLATES_DIR).join(name)
    }
}

/// Text loaded from a model, filled in place.
///
/// Substitution is literal and destructive: a replacement that contains
/// another placeholder token will be matched by a later fill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    model: String,
    content: String,
}

impl Template {
    pub fn new(model: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            content: content.into(),
        }
    }

    /// Identifier of the model this template was loaded from.
    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn into_content(self) -> String {
        self.content
    }

    /// Replaces every occurrence of `placeholder` with `replacement`.
    ///
    /// Matching is literal and case-sensitive. An empty placeholder is ignored.
    pub fn fill(&mut self, placeholder: &str, replacement: &str) -> &mut Self {
        if !placeholder.is_empty() && self.content.contains(placeholder) {
            self.content = self.content.replace(placeholder, replacement);
        }
        self
    }

    /// Fills all `placeholders`, longest token first.
    ///
    /// Tokens of equal length keep the order of the map.
    pub fn fill_all(&mut self, placeholders: &Placeholders) -> &mut Self {
        let mut ordered: Vec<(&String, &String)> = placeholders.iter().collect();
        ordered.sort_by_key(|(token, _)| std::cmp::Reverse(token.len()));
        for (token, replacement) in ordered {
            self.fill(token, replacement);
        }
        self
    }
}

/// Escapes `s` for use inside a JSON string literal, without the quotes.
pub fn json_string_fragment(s: &str) -> String {
    let quoted = serde_json::Value::String(s.to_string()).to_string();
    quoted[1..quoted.len() - 1].to_string()
}

/// Escapes `s` for use inside a single-quoted PHP string literal, without the quotes.
pub fn php_string_fragment(s: &str) -> String {
    s.replace('\\', "\\\\").replace('\'', "\\'")
}
