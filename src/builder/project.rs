//! Project setup: creates the configuration document.

use crate::config::ConfigStore;
use crate::constants::DEFAULT_THEMES_PATH;
use crate::error::{Error, Result};
use crate::prompt::Tone;
use crate::template::json_string_fragment;

use super::{ask_required, placeholders, BuildContext};

/// Model rendered into the initial configuration document
pub const PROJECT_CONFIG_MODEL: &str = "project-config";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectParams {
    pub themes_path: String,
}

pub fn wizard(ctx: &mut BuildContext<'_>) -> Result<()> {
    let themes_path = ask_required(ctx, "Themes directory:", Some(DEFAULT_THEMES_PATH))?;
    if build(ctx, ProjectParams { themes_path })? {
        ctx.prompt.write("Project configured!", Tone::Success);
    }
    Ok(())
}

/// Writes the initial configuration document.
///
/// # Returns
/// * `Result<bool>` - `false` when an existing document was kept
pub fn build(ctx: &mut BuildContext<'_>, params: ProjectParams) -> Result<bool> {
    let themes_path = params.themes_path.trim().trim_matches('/');
    if themes_path.is_empty() {
        return Err(Error::BuildError(
            "unable to configure the project without a themes directory".to_string(),
        ));
    }

    if ctx.store.exists() && !ctx.policy.resolve(ctx.store.document_path(), ctx.prompt)? {
        ctx.prompt.write(
            &format!("Kept existing configuration {}", ctx.store.document_path().display()),
            Tone::Warning,
        );
        return Ok(false);
    }

    let document = ctx.library.render(
        PROJECT_CONFIG_MODEL,
        &placeholders([("{THEMES_PATH}", json_string_fragment(themes_path).as_str())]),
    )?;
    let document = serde_json::from_str(document.content())?;
    let root = ctx.store.root_path().to_path_buf();
    let write_mode = ctx.store.write_mode();
    *ctx.store = ConfigStore::init(root, document)?;
    ctx.store.set_write_mode(write_mode);
    Ok(true)
}
