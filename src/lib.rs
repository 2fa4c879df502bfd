//! Themesmith is a scaffolding tool for WordPress themes.
//! It renders parameterized text models into theme files and keeps track of
//! what it generated in a per-project configuration document.

/// Content builders driving the interactive wizards
/// - project setup, theme, post type, taxonomy, menu, service, page
pub mod builder;

/// Command-line interface module for the themesmith application
pub mod cli;

/// Project configuration document (`themesmith.json`)
/// Dotted-path get/set/add/check with explicit flushing
pub mod config;

/// Common constants
pub mod constants;

/// Error types and handling for the themesmith application
pub mod error;

/// Glob patterns excluded from boilerplate copies
pub mod ignore;

/// File writes under an overwrite policy and boilerplate copy-merge
pub mod materialize;

/// User input and interaction handling
pub mod prompt;

/// Entity descriptors recorded under each theme
pub mod schema;

/// Template models and literal placeholder substitution
pub mod template;

/// Value tree paths and operations
pub mod value;
