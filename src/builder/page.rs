//! Page templates.

use cruet::Inflector;

use crate::error::{Error, Result};
use crate::prompt::Tone;
use crate::value::ValueKind;

use super::theme::TemplateEngine;
use super::{
    ask_for_theme, ask_required, capitalize_words, require_params, require_theme, save, theme_path,
    BuildContext,
};

pub const VIEW_MODEL: &str = "timber/view";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageParams {
    pub name: String,
    pub theme: String,
}

pub fn wizard(ctx: &mut BuildContext<'_>) -> Result<()> {
    let theme = ask_for_theme(ctx)?;
    let name = ask_required(ctx, "Template name (e.g. My Custom Page):", None)?;
    let filename = build(ctx, PageParams { name, theme })?;
    ctx.prompt.write(&format!("Page template '{filename}' added!"), Tone::Success);
    Ok(())
}

/// Writes `pages/<name>.php`, plus `views/pages/<name>.html.twig` for Timber themes.
///
/// # Returns
/// * `Result<String>` - the file name stem used for the page
pub fn build(ctx: &mut BuildContext<'_>, params: PageParams) -> Result<String> {
    require_params("page", &[params.name.as_str(), params.theme.as_str()])?;
    let theme = require_theme(ctx.store, &params.theme)?;

    let name = capitalize_words(&params.name);
    let filename = name.to_kebab_case();
    let engine_path = theme_path(&theme)?.child("template-engine")?;
    let engine = ctx
        .store
        .get_as(&engine_path, ValueKind::String, None)?
        .as_str()
        .unwrap_or_default();
    let engine = TemplateEngine::from_name(engine)
        .ok_or_else(|| Error::BuildError(format!("unknown template engine '{engine}'")))?;
    let theme_dir = ctx.store.theme_path(&theme)?;

    let mut controller = ctx.library.load(&format!("{engine}/page"))?;
    controller.fill("{TEMPLATE_NAME}", &name);

    if engine == TemplateEngine::Timber {
        controller.fill("{VIEW_FILENAME}", &filename);
        let view = ctx.library.load(VIEW_MODEL)?;
        save(ctx, &view, &theme_dir.join("views/pages").join(format!("{filename}.html.twig")))?;
    }
    save(ctx, &controller, &theme_dir.join("pages").join(format!("{filename}.php")))?;

    Ok(filename)
}
