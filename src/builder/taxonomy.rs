//! Custom taxonomy registration files.

use cruet::Inflector;

use crate::error::{Error, Result};
use crate::prompt::Tone;
use crate::schema::{EntityKind, SchemaRegistry};
use crate::template::php_string_fragment;

use super::{
    ask_for_theme, ask_required, capitalize_words, label_from_key, placeholders, require_params,
    require_theme, save, singularize, theme_setting, BuildContext,
};

pub const MODEL: &str = "taxonomy";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxonomyParams {
    pub key: String,
    pub general_name: String,
    pub singular_name: String,
    pub text_domain: String,
    pub post_types: Vec<String>,
    pub hierarchical: bool,
    pub theme: String,
}

pub fn wizard(ctx: &mut BuildContext<'_>) -> Result<()> {
    let theme = ask_for_theme(ctx)?;
    let post_types: Vec<String> = SchemaRegistry::new(ctx.store)
        .entries(&theme, EntityKind::PostType)?
        .into_iter()
        .filter_map(|entry| entry.as_str().map(str::to_string))
        .collect();
    if post_types.is_empty() {
        return Err(Error::BuildError(
            "before creating a taxonomy, you need to define a custom post type".to_string(),
        ));
    }

    let key = ask_required(ctx, "Taxonomy key (e.g. genre):", None)?.to_kebab_case();
    let default_general = format!("{}s", label_from_key(&key));
    let general_name = ask_required(ctx, "General name:", Some(default_general.as_str()))?;
    let default_singular = singularize(&general_name);
    let singular_name = ask_required(ctx, "Singular name:", Some(default_singular.as_str()))?;
    let default_domain = theme_setting(ctx.store, &theme, "text-domain")?.unwrap_or_else(|| theme.clone());
    let text_domain = ask_required(ctx, "Text domain:", Some(default_domain.as_str()))?;
    let post_types = ctx.prompt.choices("Post types:", &post_types)?;
    let hierarchical = ctx.prompt.confirm("Is hierarchical?", true)?;

    let key = build(
        ctx,
        TaxonomyParams {
            key,
            general_name,
            singular_name,
            text_domain,
            post_types,
            hierarchical,
            theme,
        },
    )?;
    ctx.prompt.write(&format!("Taxonomy '{key}' added!"), Tone::Success);
    Ok(())
}

/// Writes `includes/taxonomies/<key>.php` and records the key.
///
/// # Returns
/// * `Result<String>` - the normalized taxonomy key
pub fn build(ctx: &mut BuildContext<'_>, params: TaxonomyParams) -> Result<String> {
    require_params(
        "taxonomy",
        &[
            params.key.as_str(),
            params.general_name.as_str(),
            params.singular_name.as_str(),
            params.text_domain.as_str(),
            params.theme.as_str(),
        ],
    )?;
    if params.post_types.is_empty() {
        return Err(Error::BuildError(
            "unable to create taxonomy because of missing parameters".to_string(),
        ));
    }
    let theme = require_theme(ctx.store, &params.theme)?;

    let key = params.key.to_kebab_case();
    let general_name = php_string_fragment(&capitalize_words(&params.general_name));
    let singular_name = php_string_fragment(&capitalize_words(&params.singular_name));
    let text_domain = params.text_domain.to_kebab_case();
    let post_types = params
        .post_types
        .iter()
        .map(|post_type| format!("'{}'", post_type.to_kebab_case()))
        .collect::<Vec<_>>()
        .join(", ");
    let hierarchical = params.hierarchical.to_string();

    let template = ctx.library.render(
        MODEL,
        &placeholders([
            ("{KEY}", key.as_str()),
            ("{GENERAL_NAME}", general_name.as_str()),
            ("{SINGULAR_NAME}", singular_name.as_str()),
            ("{TEXT_DOMAIN}", text_domain.as_str()),
            ("{POST_TYPES}", post_types.as_str()),
            ("{HIERARCHICAL}", hierarchical.as_str()),
        ]),
    )?;
    let target = ctx
        .store
        .theme_path(&theme)?
        .join("includes/taxonomies")
        .join(format!("{key}.php"));
    save(ctx, &template, &target)?;

    SchemaRegistry::new(ctx.store).record(&theme, EntityKind::Taxonomy, &key)?;
    Ok(key)
}
