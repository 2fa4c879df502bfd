//! REST API service endpoints.

use std::sync::LazyLock;

use cruet::Inflector;
use regex::{Captures, Regex};

use crate::error::Result;
use crate::prompt::Tone;
use crate::schema::{EntityKind, SchemaRegistry, ServiceDescriptor};

use super::{
    ask_for_theme, ask_required, placeholders, require_params, require_theme, save, theme_setting,
    BuildContext,
};

pub const MODEL: &str = "service";
pub const METHODS: [&str; 2] = ["GET", "POST"];

static PATH_PARAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([^/{}]+)\}").expect("path parameter pattern is valid"));
static PATH_PARAM_SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/?\{[^/{}]+\}").expect("path parameter segment pattern is valid"));
static INVALID_ROUTE_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9{}_\-]").expect("route character pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceParams {
    pub namespace: String,
    pub route: String,
    pub method: String,
    pub theme: String,
}

pub fn wizard(ctx: &mut BuildContext<'_>) -> Result<()> {
    let theme = ask_for_theme(ctx)?;
    let namespace = ask_required(ctx, "Namespace (e.g. my-plugin/v1):", None)?;
    let route = ask_required(ctx, "Route (e.g. /endpoint/{param}):", None)?;
    let methods = METHODS.map(String::from);
    let method = ctx.prompt.choice("Method:", &methods, Some(0))?;

    build(
        ctx,
        ServiceParams {
            namespace,
            route,
            method,
            theme,
        },
    )?;
    ctx.prompt.write("Service added!", Tone::Success);
    Ok(())
}

/// Drops empty segments and characters that cannot appear in a route.
/// Path parameters are normalized to snake case so they stay valid group names.
pub(crate) fn sanitize_route(route: &str) -> String {
    let route = route
        .split('/')
        .map(|segment| INVALID_ROUTE_CHARS.replace_all(&segment.trim().replace(' ', "-"), "").into_owned())
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("/");
    PATH_PARAM
        .replace_all(&route, |caps: &Captures| format!("{{{}}}", caps[1].to_snake_case()))
        .into_owned()
}

/// Directory holding the routes of a sanitized namespace.
pub(crate) fn namespace_dir(namespace: &str) -> String {
    namespace.replace('/', "-")
}

/// Replaces every `{param}` with a named capture group.
pub(crate) fn encode_route(route: &str) -> String {
    PATH_PARAM
        .replace_all(route, |caps: &Captures| format!("(?P<{}>[a-zA-Z0-9-]+)", &caps[1]))
        .into_owned()
}

/// File name stem of a route: its static segments joined by dashes.
pub(crate) fn route_name(route: &str) -> String {
    let name = PATH_PARAM_SEGMENT.replace_all(route, "").replace('/', "-");
    let name = name.trim_matches('-').to_kebab_case();
    if name.is_empty() {
        "index".to_string()
    } else {
        name
    }
}

/// Writes `includes/services/<namespace-dir>/<route-name>.php` and records a
/// [`ServiceDescriptor`].
///
/// The namespace directory is a single segment (`my-plugin/v1` becomes
/// `my-plugin-v1`) so the theme's include glob reaches the file.
pub fn build(ctx: &mut BuildContext<'_>, params: ServiceParams) -> Result<ServiceDescriptor> {
    require_params(
        "service",
        &[params.namespace.as_str(), params.route.as_str(), params.theme.as_str()],
    )?;
    let theme = require_theme(ctx.store, &params.theme)?;

    let namespace = sanitize_route(&params.namespace);
    let route = format!("/{}", sanitize_route(&params.route));
    let encoded_route = encode_route(&route);
    let method = params.method.trim().to_uppercase();
    let method = if METHODS.contains(&method.as_str()) {
        method
    } else {
        METHODS[0].to_string()
    };
    let text_domain = theme_setting(ctx.store, &theme, "text-domain")?.unwrap_or_default();

    let template = ctx.library.render(
        MODEL,
        &placeholders([
            ("{NAMESPACE}", namespace.as_str()),
            ("{ROUTE}", encoded_route.as_str()),
            ("{METHOD}", method.as_str()),
            ("{TEXT_DOMAIN}", text_domain.as_str()),
        ]),
    )?;
    let target = ctx
        .store
        .theme_path(&theme)?
        .join("includes/services")
        .join(namespace_dir(&namespace))
        .join(format!("{}.php", route_name(&route)));
    save(ctx, &template, &target)?;

    let descriptor = ServiceDescriptor {
        namespace,
        route,
        method,
    };
    SchemaRegistry::new(ctx.store).record(&theme, EntityKind::Service, &descriptor)?;
    Ok(descriptor)
}
