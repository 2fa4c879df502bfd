//! Custom post type registration files.

use cruet::Inflector;

use crate::error::Result;
use crate::prompt::Tone;
use crate::schema::{EntityKind, SchemaRegistry};
use crate::template::php_string_fragment;

use super::{
    ask_for_theme, ask_required, capitalize_first, capitalize_words, label_from_key, non_blank,
    placeholders, require_params, require_theme, save, singularize, theme_setting, BuildContext,
};

pub const MODEL: &str = "post-type";
pub const CAPABILITY_TYPES: [&str; 2] = ["post", "page"];
pub const DEFAULT_ICON: &str = "dashicons-admin-post";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostTypeParams {
    pub key: String,
    pub general_name: String,
    pub singular_name: String,
    pub text_domain: String,
    pub capability_type: String,
    /// Comma separated taxonomy keys
    pub taxonomies: String,
    pub icon: String,
    pub description: String,
    pub theme: String,
}

pub fn wizard(ctx: &mut BuildContext<'_>) -> Result<()> {
    let theme = ask_for_theme(ctx)?;
    let key = ask_required(ctx, "Post type key (e.g. event):", None)?;
    let default_general = format!("{}s", label_from_key(&key));
    let general_name = ask_required(ctx, "General name:", Some(default_general.as_str()))?;
    let default_singular = singularize(&general_name);
    let singular_name = ask_required(ctx, "Singular name:", Some(default_singular.as_str()))?;
    let default_domain = theme_setting(ctx.store, &theme, "text-domain")?.unwrap_or_else(|| theme.clone());
    let text_domain = ask_required(ctx, "Text domain:", Some(default_domain.as_str()))?;
    let capability_types = CAPABILITY_TYPES.map(String::from);
    let capability_type = ctx.prompt.choice("Capability type:", &capability_types, Some(0))?;
    let taxonomies = ctx.prompt.answer("Taxonomies (comma separated):", Some(""))?;
    let icon = ctx.prompt.answer("Icon:", Some(DEFAULT_ICON))?;
    let description = ctx.prompt.answer("Description:", Some(""))?;

    let key = build(
        ctx,
        PostTypeParams {
            key,
            general_name,
            singular_name,
            text_domain,
            capability_type,
            taxonomies,
            icon,
            description,
            theme,
        },
    )?;
    ctx.prompt.write(&format!("Post type '{key}' added!"), Tone::Success);
    Ok(())
}

/// Renders `taxonomies` ("genre, Event Place") as PHP string list items.
pub(crate) fn php_string_list(values: &str) -> String {
    values
        .split(',')
        .filter_map(non_blank)
        .map(|value| format!("'{}'", value.to_kebab_case()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Writes `includes/post-types/<key>.php` and records the key.
///
/// # Returns
/// * `Result<String>` - the normalized post type key
pub fn build(ctx: &mut BuildContext<'_>, params: PostTypeParams) -> Result<String> {
    require_params(
        "post type",
        &[
            params.key.as_str(),
            params.general_name.as_str(),
            params.singular_name.as_str(),
            params.text_domain.as_str(),
            params.capability_type.as_str(),
            params.theme.as_str(),
        ],
    )?;
    let theme = require_theme(ctx.store, &params.theme)?;

    let key = params.key.to_kebab_case();
    let general_name = php_string_fragment(&capitalize_words(&params.general_name));
    let singular_name = php_string_fragment(&capitalize_words(&params.singular_name));
    let text_domain = params.text_domain.to_kebab_case();
    let capability_type = php_string_fragment(&params.capability_type.trim().to_lowercase());
    let taxonomies = php_string_list(&params.taxonomies);
    let icon = non_blank(&params.icon).map_or_else(|| DEFAULT_ICON.to_string(), |icon| icon.to_kebab_case());
    let description = php_string_fragment(&capitalize_first(&params.description));

    let template = ctx.library.render(
        MODEL,
        &placeholders([
            ("{KEY}", key.as_str()),
            ("{GENERAL_NAME}", general_name.as_str()),
            ("{SINGULAR_NAME}", singular_name.as_str()),
            ("{TEXT_DOMAIN}", text_domain.as_str()),
            ("{CAPABILITY_TYPE}", capability_type.as_str()),
            ("{TAXONOMIES}", taxonomies.as_str()),
            ("{ICON}", icon.as_str()),
            ("{DESCRIPTION}", description.as_str()),
        ]),
    )?;
    let target = ctx
        .store
        .theme_path(&theme)?
        .join("includes/post-types")
        .join(format!("{key}.php"));
    save(ctx, &template, &target)?;

    SchemaRegistry::new(ctx.store).record(&theme, EntityKind::PostType, &key)?;
    Ok(key)
}
