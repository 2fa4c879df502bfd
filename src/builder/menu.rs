//! Navigation menu locations.

use cruet::Inflector;

use crate::error::Result;
use crate::prompt::Tone;
use crate::schema::{EntityKind, MenuDescriptor, SchemaRegistry};
use crate::template::php_string_fragment;

use super::{
    ask_for_theme, ask_required, capitalize_first, capitalize_words, label_from_key, non_blank,
    placeholders, require_params, require_theme, save, theme_setting, BuildContext,
};

pub const MODEL: &str = "menu";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuParams {
    pub location: String,
    pub name: String,
    pub description: String,
    pub text_domain: String,
    pub theme: String,
}

pub fn wizard(ctx: &mut BuildContext<'_>) -> Result<()> {
    let theme = ask_for_theme(ctx)?;
    let location = ask_required(ctx, "Location (e.g. main-menu):", None)?;
    let default_name = label_from_key(&location);
    let name = ask_required(ctx, "Name:", Some(default_name.as_str()))?;
    let description = ask_required(ctx, "Description:", Some(name.as_str()))?;
    let default_domain = theme_setting(ctx.store, &theme, "text-domain")?.unwrap_or_default();
    let text_domain = ctx.prompt.answer("Text domain:", Some(default_domain.as_str()))?;

    build(
        ctx,
        MenuParams {
            location,
            name,
            description,
            text_domain,
            theme,
        },
    )?;
    ctx.prompt.write("Menu added!", Tone::Success);
    Ok(())
}

/// Writes `includes/menus/<location>.php` and records a [`MenuDescriptor`].
pub fn build(ctx: &mut BuildContext<'_>, params: MenuParams) -> Result<MenuDescriptor> {
    require_params(
        "menu",
        &[
            params.location.as_str(),
            params.name.as_str(),
            params.description.as_str(),
            params.theme.as_str(),
        ],
    )?;
    let theme = require_theme(ctx.store, &params.theme)?;

    let descriptor = MenuDescriptor {
        location: params.location.to_kebab_case(),
        name: capitalize_words(&params.name),
        description: capitalize_first(&params.description),
    };
    let function_name = descriptor.location.to_snake_case();
    let name = php_string_fragment(&descriptor.name);
    let text_domain = non_blank(&params.text_domain).map_or_else(|| "default".to_string(), |domain| domain.to_kebab_case());

    let template = ctx.library.render(
        MODEL,
        &placeholders([
            ("{LOCATION}", descriptor.location.as_str()),
            ("{FUNCTION_NAME}", function_name.as_str()),
            ("{NAME}", name.as_str()),
            ("{TEXT_DOMAIN}", text_domain.as_str()),
        ]),
    )?;
    let target = ctx
        .store
        .theme_path(&theme)?
        .join("includes/menus")
        .join(format!("{}.php", descriptor.location));
    save(ctx, &template, &target)?;

    SchemaRegistry::new(ctx.store).record(&theme, EntityKind::Menu, &descriptor)?;
    Ok(descriptor)
}
