//! Command-line interface implementation for themesmith.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser, Subcommand};
use log::debug;
use std::path::{Path, PathBuf};

use crate::builder::ContentType;
use crate::constants::MODELS_DIR;
use crate::materialize::MaterializationPolicy;

/// Command-line arguments structure for themesmith.
#[derive(Parser, Debug)]
#[command(author, version, about = "Themesmith: WordPress theme scaffolding tool", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project root. Defaults to the nearest directory containing composer.json
    #[arg(long, value_name = "DIR", global = true)]
    pub root: Option<PathBuf>,

    /// Directory holding the template models and boilerplates
    #[arg(long, value_name = "DIR", global = true)]
    pub models: Option<PathBuf>,

    /// What to do when a generated file already exists
    #[arg(long, value_enum, default_value_t = MaterializationPolicy::AskIfExists, global = true)]
    pub overwrite: MaterializationPolicy,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create the project configuration
    Init,

    /// Add a new content to the project
    Add {
        /// The content type; asked interactively when omitted
        #[arg(value_enum, value_name = "CONTENT_TYPE")]
        content_type: Option<ContentType>,
    },
}

impl Args {
    /// Models directory from the arguments, or the one installed with the binary.
    pub fn models_dir(&self) -> PathBuf {
        self.models.clone().unwrap_or_else(|| {
            let exe_dir = std::env::current_exe()
                .ok()
                .and_then(|exe| exe.parent().map(Path::to_path_buf));
            locate_models_dir(exe_dir.as_deref())
        })
    }
}

/// Finds the shipped models relative to the directory of the executable.
///
/// Looks at `<exe_dir>/models`, then `<exe_dir>/../share/themesmith/models`,
/// and falls back to the `models/` directory of the source tree.
pub fn locate_models_dir(exe_dir: Option<&Path>) -> PathBuf {
    let fallback = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(MODELS_DIR);
    let Some(exe_dir) = exe_dir else {
        return fallback;
    };
    [
        exe_dir.join(MODELS_DIR),
        exe_dir.join("../share").join(env!("CARGO_PKG_NAME")).join(MODELS_DIR),
    ]
    .into_iter()
    .find(|candidate| candidate.is_dir())
    .unwrap_or_else(|| {
        debug!("No models next to {}, using {}", exe_dir.display(), fallback.display());
        fallback
    })
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if the subcommand is missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingSubcommand
                || e.kind() == ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            {
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
