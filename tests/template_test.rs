mod common;

use std::fs;

use tempfile::TempDir;
use themesmith::error::Error;
use themesmith::template::{ModelLibrary, Placeholders, Template};

use common::shipped_models;

#[test]
fn test_fill_replaces_every_occurrence() {
    let mut template = Template::new("inline", "{KEY}-{KEY} and {KEY}");
    template.fill("{KEY}", "event");
    assert_eq!(template.content(), "event-event and event");
}

#[test]
fn test_fill_missing_placeholder_is_noop() {
    let mut template = Template::new("inline", "unchanged");
    template.fill("{KEY}", "event").fill("", "x");
    assert_eq!(template.content(), "unchanged");
}

#[test]
fn test_load_from_library() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir_all(temp_dir.path().join("timber")).unwrap();
    fs::write(temp_dir.path().join("timber/page"), "Template Name: {TEMPLATE_NAME}").unwrap();
    let library = ModelLibrary::new(temp_dir.path());

    assert!(library.contains("timber/page"));
    let mut template = library.load("timber/page").unwrap();
    assert_eq!(template.model(), "timber/page");
    template.fill("{TEMPLATE_NAME}", "Landing");
    assert_eq!(template.into_content(), "Template Name: Landing");
}

#[test]
fn test_missing_model() {
    let temp_dir = TempDir::new().unwrap();
    let library = ModelLibrary::new(temp_dir.path());

    assert!(!library.contains("widget"));
    match library.load("widget") {
        Err(Error::ModelNotFound { model, .. }) => assert_eq!(model, "widget"),
        other => panic!("Expected ModelNotFound, got {other:?}"),
    }
    assert!(matches!(
        library.load("../widget"),
        Err(Error::ModelNotFound { .. })
    ));
}

#[test]
fn test_render_with_placeholders() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("menu"), "register_nav_menu('{LOCATION}', '{NAME}');").unwrap();
    let library = ModelLibrary::new(temp_dir.path());

    let mut placeholders = Placeholders::new();
    placeholders.insert("{LOCATION}".to_string(), "main-menu".to_string());
    placeholders.insert("{NAME}".to_string(), "Main Menu".to_string());
    let template = library.render("menu", &placeholders).unwrap();

    assert_eq!(template.content(), "register_nav_menu('main-menu', 'Main Menu');");
}

#[test]
fn test_shipped_models_are_present() {
    let library = shipped_models();
    for model in [
        "project-config",
        "theme-config",
        "theme-functions",
        "theme-stylesheet",
        "post-type",
        "taxonomy",
        "menu",
        "service",
        "timber/page",
        "timber/view",
        "standard/page",
    ] {
        assert!(library.contains(model), "missing model {model}");
    }
    assert!(library.boilerplate_dir("commons").is_dir());
}
