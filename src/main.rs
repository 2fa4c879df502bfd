//! Themesmith's main application entry point.
//! Handles command-line argument parsing, logger setup and dispatch of the
//! requested command to the builders.

use themesmith::{
    builder::{project, run_wizard, BuildContext, ContentType},
    cli::{get_args, Args, Command},
    config::{find_project_root, ConfigStore},
    error::{default_error_handler, Result},
    prompt::{DialoguerPrompter, Prompter},
    template::ModelLibrary,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Asks which content to add when none was given on the command line.
fn ask_content_type(prompt: &dyn Prompter) -> Result<ContentType> {
    let names = ContentType::all().map(|content_type| content_type.as_str().to_string());
    let name = prompt.choice("What kind of content do you want to add?", &names, None)?;
    Ok(ContentType::from_name(&name).unwrap_or(ContentType::Theme))
}

/// Main application logic execution.
///
/// # Flow
/// 1. Locates the project root and opens its configuration
/// 2. Runs project setup when requested, or when `add` finds no configuration
/// 3. Runs the wizard of the requested content type
fn run(args: Args) -> Result<()> {
    let prompt = DialoguerPrompter::new();
    let library = ModelLibrary::new(args.models_dir());

    let root = match &args.root {
        Some(root) => root.clone(),
        None => find_project_root(std::env::current_dir()?)?,
    };
    log::debug!("Project root: {}", root.display());
    let mut store = ConfigStore::open(&root)?;

    let mut ctx = BuildContext {
        store: &mut store,
        library: &library,
        prompt: &prompt,
        policy: args.overwrite,
    };

    match args.command {
        Command::Init => project::wizard(&mut ctx),
        Command::Add { content_type } => {
            if !ctx.store.exists() {
                let setup = ctx.prompt.confirm(
                    "Your project is not configured yet. Do you want to run setup right now?",
                    true,
                )?;
                if !setup {
                    return Ok(());
                }
                project::wizard(&mut ctx)?;
            }

            let content_type = match content_type {
                Some(content_type) => content_type,
                None => ask_content_type(ctx.prompt)?,
            };
            run_wizard(content_type, &mut ctx)
        }
    }
}
