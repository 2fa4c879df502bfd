//! Common constants used throughout the themesmith application.

/// Name of the project configuration document, stored at the project root
pub const CONFIG_FILE: &str = "themesmith.json";

/// File whose presence marks the project root
pub const MANIFEST_FILE: &str = "composer.json";

/// Configuration key holding the themes directory, relative to the project root
pub const THEMES_PATH_KEY: &str = "themes-path";

/// Configuration key holding the map of installed themes
pub const THEMES_KEY: &str = "themes";

/// Default themes directory offered by `init`
pub const DEFAULT_THEMES_PATH: &str = "wp-content/themes";

/// Name of the model library directory shipped with the binary
pub const MODELS_DIR: &str = "models";

/// Directory, inside the model library, holding the theme boilerplates
pub const BOILERPLATES_DIR: &str = "boilerplates";

/// Boilerplate shared by every template engine
pub const COMMON_BOILERPLATE: &str = "commons";

/// Patterns never copied out of a boilerplate
pub const DEFAULT_IGNORE_PATTERNS: [&str; 3] = ["**/.DS_Store", "**/Thumbs.db", "**/.gitkeep"];
