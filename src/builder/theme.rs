//! Theme installation: directory, boilerplate, `functions.php`, `style.css`
//! and the theme entry of the project configuration.

use std::fmt;

use cruet::Inflector;
use log::debug;

use crate::config::relative_root_path;
use crate::constants::{COMMON_BOILERPLATE, THEMES_PATH_KEY};
use crate::error::Result;
use crate::materialize::{self, MaterializationPolicy};
use crate::prompt::Tone;
use crate::template::json_string_fragment;
use crate::value::ConfigPath;

use super::{
    ask_required, capitalize_words, non_blank, placeholders, require_params, save, theme_path,
    BuildContext,
};

pub const FUNCTIONS_MODEL: &str = "theme-functions";
pub const STYLESHEET_MODEL: &str = "theme-stylesheet";
pub const CONFIG_MODEL: &str = "theme-config";

/// Rendering stack of a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateEngine {
    Timber,
    Standard,
}

impl TemplateEngine {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Timber => "timber",
            Self::Standard => "standard",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "timber" => Some(Self::Timber),
            "standard" => Some(Self::Standard),
            _ => None,
        }
    }
}

impl fmt::Display for TemplateEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeParams {
    pub name: String,
    pub uri: String,
    pub author: String,
    pub author_uri: String,
    pub description: String,
    pub version: String,
    pub license: String,
    pub license_uri: String,
    pub text_domain: String,
    pub tags: String,
    pub folder: String,
    pub namespace: String,
    pub engine: TemplateEngine,
}

pub fn wizard(ctx: &mut BuildContext<'_>) -> Result<()> {
    ctx.store.check(&ConfigPath::parse(THEMES_PATH_KEY)?, None, None)?;

    let name = capitalize_words(&ask_required(ctx, "Theme name:", None)?);
    let uri = ctx.prompt.answer("Theme URI:", Some(""))?;
    let author = ctx.prompt.answer("Author:", Some(""))?;
    let author_uri = ctx.prompt.answer("Author URI:", Some(""))?;
    let description = ctx.prompt.answer("Description:", Some(""))?;
    let version = ctx.prompt.answer("Version:", Some("1.0.0"))?;
    let license = ctx.prompt.answer("License:", Some("GNU General Public License v2 or later"))?;
    let license_uri = ctx
        .prompt
        .answer("License URI:", Some("http://www.gnu.org/licenses/gpl-2.0.html"))?;
    let slug = name.to_kebab_case();
    let text_domain = ask_required(ctx, "Text domain:", Some(slug.as_str()))?;
    let tags = ctx.prompt.answer("Tags (comma separated):", Some(""))?;
    let folder = ask_required(ctx, "Folder name:", Some(slug.as_str()))?;
    let default_namespace = name.to_pascal_case();
    let namespace = ask_required(ctx, "PHP namespace:", Some(default_namespace.as_str()))?;
    let engines = [TemplateEngine::Timber, TemplateEngine::Standard].map(|e| e.to_string());
    let engine = ctx.prompt.choice("Template engine:", &engines, Some(0))?;

    build(
        ctx,
        ThemeParams {
            name,
            uri,
            author,
            author_uri,
            description,
            version,
            license,
            license_uri,
            text_domain,
            tags,
            folder,
            namespace,
            engine: TemplateEngine::from_name(&engine).unwrap_or(TemplateEngine::Timber),
        },
    )?;
    ctx.prompt.write("Theme installed!", Tone::Success);
    Ok(())
}

/// Whether the configuration entry of an already configured theme may be reset.
fn may_reset(ctx: &BuildContext<'_>, folder: &str) -> Result<bool> {
    if ctx.store.get(&theme_path(folder)?).is_null() {
        return Ok(true);
    }
    match ctx.policy {
        MaterializationPolicy::Force => Ok(true),
        MaterializationPolicy::NeverOverwrite => Ok(false),
        MaterializationPolicy::AskIfExists => ctx.prompt.confirm(
            &format!("Theme '{folder}' is already configured. Reset its configuration?"),
            false,
        ),
    }
}

pub fn build(ctx: &mut BuildContext<'_>, params: ThemeParams) -> Result<()> {
    require_params(
        "theme",
        &[
            params.name.as_str(),
            params.text_domain.as_str(),
            params.folder.as_str(),
            params.namespace.as_str(),
        ],
    )?;

    let folder = params.folder.to_kebab_case();
    let text_domain = params.text_domain.to_kebab_case();
    let namespace = params.namespace.to_pascal_case();
    let engine = params.engine.as_str();
    let theme_dir = ctx.store.theme_path(&folder)?;

    materialize::create_directory(&theme_dir)?;
    for boilerplate in [COMMON_BOILERPLATE, engine] {
        let source = ctx.library.boilerplate_dir(boilerplate);
        if materialize::directory_exists(&source) {
            let report = materialize::copy_files(&source, &theme_dir)?;
            debug!(
                "Boilerplate '{}': {} created, {} kept",
                boilerplate,
                report.created.len(),
                report.skipped.len()
            );
        }
    }

    let themes_path = ctx.store.get_str(&ConfigPath::parse(THEMES_PATH_KEY)?)?;
    let root_path = relative_root_path(&format!("{themes_path}/{folder}/functions.php"));
    let functions = ctx.library.render(
        FUNCTIONS_MODEL,
        &placeholders([
            ("{PROJECT_ROOT}", root_path.as_str()),
            ("{NAMESPACE}", namespace.as_str()),
        ]),
    )?;
    save(ctx, &functions, &theme_dir.join("functions.php"))?;

    let tags = params
        .tags
        .split(',')
        .filter_map(non_blank)
        .map(|tag| tag.to_kebab_case())
        .collect::<Vec<_>>()
        .join(", ");
    let stylesheet = ctx.library.render(
        STYLESHEET_MODEL,
        &placeholders([
            ("{THEME_NAME}", params.name.trim()),
            ("{THEME_URI}", params.uri.trim()),
            ("{AUTHOR}", params.author.trim()),
            ("{AUTHOR_URI}", params.author_uri.trim()),
            ("{DESCRIPTION}", params.description.trim()),
            ("{VERSION}", params.version.trim()),
            ("{LICENSE}", params.license.trim()),
            ("{LICENSE_URI}", params.license_uri.trim()),
            ("{TEXT_DOMAIN}", text_domain.as_str()),
            ("{TAGS}", tags.as_str()),
        ]),
    )?;
    save(ctx, &stylesheet, &theme_dir.join("style.css"))?;

    if may_reset(ctx, &folder)? {
        let theme_config = ctx.library.render(
            CONFIG_MODEL,
            &placeholders([
                ("{NAMESPACE}", json_string_fragment(&namespace).as_str()),
                ("{TEXT_DOMAIN}", json_string_fragment(&text_domain).as_str()),
                ("{TEMPLATE_ENGINE}", engine),
            ]),
        )?;
        let theme_config = serde_json::from_str(theme_config.content())?;
        ctx.store.set(&theme_path(&folder)?, theme_config)?;
    }
    Ok(())
}
