//! Content builders.
//! Each builder asks its questions through the [`Prompter`], renders its
//! models and saves them under the theme directory, then records what it
//! created in the project configuration.

use std::path::Path;

use clap::ValueEnum;
use cruet::Inflector;

use crate::config::ConfigStore;
use crate::constants::THEMES_KEY;
use crate::error::{Error, Result};
use crate::materialize::{self, MaterializationPolicy, WriteResult};
use crate::prompt::{Prompter, Tone};
use crate::template::{ModelLibrary, Placeholders, Template};
use crate::value::{ConfigPath, ValueKind};

pub mod menu;
pub mod page;
pub mod post_type;
pub mod project;
pub mod service;
pub mod taxonomy;
pub mod theme;

/// Everything a builder needs for one command.
pub struct BuildContext<'a> {
    pub store: &'a mut ConfigStore,
    pub library: &'a ModelLibrary,
    pub prompt: &'a dyn Prompter,
    pub policy: MaterializationPolicy,
}

/// Content that can be added to a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ContentType {
    Theme,
    PostType,
    Taxonomy,
    Menu,
    Service,
    Page,
}

impl ContentType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Theme => "theme",
            Self::PostType => "post-type",
            Self::Taxonomy => "taxonomy",
            Self::Menu => "menu",
            Self::Service => "service",
            Self::Page => "page",
        }
    }

    pub fn all() -> [ContentType; 6] {
        [
            Self::Theme,
            Self::PostType,
            Self::Taxonomy,
            Self::Menu,
            Self::Service,
            Self::Page,
        ]
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().into_iter().find(|content_type| content_type.as_str() == name)
    }
}

/// Runs the wizard of `content_type`.
pub fn run_wizard(content_type: ContentType, ctx: &mut BuildContext<'_>) -> Result<()> {
    match content_type {
        ContentType::Theme => theme::wizard(ctx),
        ContentType::PostType => post_type::wizard(ctx),
        ContentType::Taxonomy => taxonomy::wizard(ctx),
        ContentType::Menu => menu::wizard(ctx),
        ContentType::Service => service::wizard(ctx),
        ContentType::Page => page::wizard(ctx),
    }
}

/// Builds a placeholder map from literal pairs.
pub fn placeholders<const N: usize>(pairs: [(&str, &str); N]) -> Placeholders {
    pairs
        .into_iter()
        .map(|(token, replacement)| (token.to_string(), replacement.to_string()))
        .collect()
}

/// `Some(value)` unless `value` is blank.
pub(crate) fn non_blank(value: &str) -> Option<&str> {
    let value = value.trim();
    (!value.is_empty()).then_some(value)
}

/// Fails with a builder error unless every value is non-blank.
pub(crate) fn require_params(entity: &str, values: &[&str]) -> Result<()> {
    if values.iter().any(|value| non_blank(value).is_none()) {
        return Err(Error::BuildError(format!(
            "unable to create {entity} because of missing parameters"
        )));
    }
    Ok(())
}

/// Upper-cases the first letter of every word.
pub(crate) fn capitalize_words(value: &str) -> String {
    value
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Upper-cases the first letter of `value`.
pub(crate) fn capitalize_first(value: &str) -> String {
    let value = value.trim();
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `"Events"` → `"Event"`.
pub(crate) fn singularize(value: &str) -> String {
    value.strip_suffix('s').unwrap_or(value).to_string()
}

/// Default label for a dashed key: `main-menu` → `Main Menu`.
pub(crate) fn label_from_key(key: &str) -> String {
    key.to_title_case()
}

pub(crate) fn theme_path(theme: &str) -> Result<ConfigPath> {
    ConfigPath::from_segments([THEMES_KEY, theme])
}

/// Normalizes `theme` and checks that it is configured.
///
/// # Errors
/// * `Error::ConfigMissing`/`Error::ConfigInvalid` if the project has no such theme
pub(crate) fn require_theme(store: &ConfigStore, theme: &str) -> Result<String> {
    let theme = theme.to_kebab_case();
    if theme.is_empty() {
        return Err(Error::BuildError("no theme given".to_string()));
    }
    let message = format!("Error: theme '{theme}' doesn't exist.");
    store.check(&theme_path(&theme)?, Some(ValueKind::Map), Some(message.as_str()))?;
    Ok(theme)
}

/// String setting of a theme, `None` when absent or not a string.
pub(crate) fn theme_setting(store: &ConfigStore, theme: &str, key: &str) -> Result<Option<String>> {
    let path = theme_path(theme)?.child(key)?;
    Ok(store.get(&path).as_str().map(str::to_string))
}

/// Lets the user pick one of the configured themes.
pub(crate) fn ask_for_theme(ctx: &BuildContext<'_>) -> Result<String> {
    let themes: Vec<String> = ctx
        .store
        .get(&ConfigPath::parse(THEMES_KEY)?)
        .as_object()
        .map(|themes| themes.keys().cloned().collect())
        .unwrap_or_default();

    match themes.as_slice() {
        [] => Err(Error::BuildError(
            "no theme configured yet, add one with `themesmith add theme` first".to_string(),
        )),
        [only] => Ok(only.clone()),
        _ => ctx.prompt.choice("Theme:", &themes, None),
    }
}

/// Asks until a non-blank answer is given.
pub(crate) fn ask_required(ctx: &BuildContext<'_>, prompt: &str, default: Option<&str>) -> Result<String> {
    loop {
        let answer = ctx.prompt.answer(prompt, default)?;
        if let Some(answer) = non_blank(&answer) {
            return Ok(answer.to_string());
        }
    }
}

/// Saves `template` at `path` under the context policy and reports the outcome.
pub(crate) fn save(ctx: &BuildContext<'_>, template: &Template, path: &Path) -> Result<WriteResult> {
    let result = materialize::save(template, path, ctx.policy, ctx.prompt)?;
    if result.written {
        ctx.prompt.write(&format!("Created {}", result.path.display()), Tone::Info);
    } else {
        ctx.prompt.write(
            &format!("Skipped {}: file already exists", result.path.display()),
            Tone::Warning,
        );
    }
    Ok(result)
}
