mod common;

use std::fs;

use serde_json::json;
use tempfile::TempDir;
use test_log::test;
use themesmith::config::{ConfigStore, WriteMode};
use themesmith::constants::CONFIG_FILE;
use themesmith::error::Error;
use themesmith::value::{ConfigPath, ValueKind};

use common::{project_dir, read};

fn path(s: &str) -> ConfigPath {
    ConfigPath::parse(s).unwrap()
}

#[test]
fn test_open_without_document_is_empty() {
    let temp_dir = TempDir::new().unwrap();
    let store = ConfigStore::open(temp_dir.path()).unwrap();

    assert!(!store.exists());
    assert_eq!(store.params(), &json!({}));
    assert!(store.get(&path("themes-path")).is_null());
}

#[test]
fn test_set_then_get() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = ConfigStore::open(temp_dir.path()).unwrap();

    store.set(&path("themes.demo.namespace"), json!("Demo")).unwrap();

    assert_eq!(store.get(&path("themes.demo.namespace")), &json!("Demo"));
    assert_eq!(store.get(&path("themes.demo")), &json!({"namespace": "Demo"}));
    assert!(store.exists());
}

#[test]
fn test_set_writes_through_by_default() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = ConfigStore::open(temp_dir.path()).unwrap();
    assert_eq!(store.write_mode(), WriteMode::Immediate);

    store.set(&path("themes-path"), json!("wp-content/themes")).unwrap();

    assert!(!store.is_dirty());
    assert_eq!(
        read(temp_dir.path().join(CONFIG_FILE)),
        "{\n    \"themes-path\": \"wp-content/themes\"\n}\n"
    );
}

#[test]
fn test_deferred_mode_waits_for_flush() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = ConfigStore::open(temp_dir.path()).unwrap();
    store.set_write_mode(WriteMode::Deferred);

    store.set(&path("themes-path"), json!("themes")).unwrap();
    store.add(&path("themes.demo.menus"), json!("main")).unwrap();

    assert!(store.is_dirty());
    assert!(!temp_dir.path().join(CONFIG_FILE).exists());

    store.flush().unwrap();

    assert!(!store.is_dirty());
    let reopened = ConfigStore::open(temp_dir.path()).unwrap();
    assert_eq!(reopened.params(), store.params());
}

#[test]
fn test_add_twice_keeps_one_scalar() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = ConfigStore::open(temp_dir.path()).unwrap();
    let post_types = path("themes.demo.post-types");

    assert!(store.add(&post_types, json!("event")).unwrap());
    assert!(!store.add(&post_types, json!("event")).unwrap());
    assert!(store.add(&post_types, json!("book")).unwrap());

    assert_eq!(store.get(&post_types), &json!(["event", "book"]));
}

#[test]
fn test_add_appends_equal_maps_twice() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = ConfigStore::open(temp_dir.path()).unwrap();
    let menus = path("themes.demo.menus");
    let menu = json!({"location": "main-menu", "name": "Main Menu"});

    assert!(store.add(&menus, menu.clone()).unwrap());
    assert!(store.add(&menus, menu.clone()).unwrap());

    assert_eq!(store.get(&menus), &json!([menu.clone(), menu]));
}

#[test]
fn test_add_to_scalar_fails() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = ConfigStore::open(temp_dir.path()).unwrap();
    store.set(&path("themes-path"), json!("themes")).unwrap();

    let err = store.add(&path("themes-path"), json!("other")).unwrap_err();
    assert!(matches!(err, Error::ConfigType { found: ValueKind::String, .. }));
}

#[test]
fn test_post_types_of_a_theme() {
    let temp_dir = project_dir();
    let mut store = ConfigStore::open(temp_dir.path()).unwrap();
    store
        .set(&path("themes.demo"), json!({"namespace": "Demo", "post-types": []}))
        .unwrap();

    store.add(&path("themes.demo.post-types"), json!("event")).unwrap();

    let reopened = ConfigStore::discover(temp_dir.path()).unwrap();
    assert_eq!(
        reopened.params(),
        &json!({"themes": {"demo": {"namespace": "Demo", "post-types": ["event"]}}})
    );
    assert_eq!(
        reopened
            .get_as(&path("themes.demo.post-types"), ValueKind::Array, None)
            .unwrap(),
        &json!(["event"])
    );
}

#[test]
fn test_get_strict_on_missing_path() {
    let temp_dir = TempDir::new().unwrap();
    let store = ConfigStore::open(temp_dir.path()).unwrap();

    let err = store.get_strict(&path("themes-path")).unwrap_err();
    match err {
        Error::ConfigMissing { path, message } => {
            assert_eq!(path, "themes-path");
            assert!(message.starts_with("Error: the required param 'themes-path' is missing or invalid in"));
        }
        other => panic!("Expected ConfigMissing, got {other:?}"),
    }
}

#[test]
fn test_check_uses_custom_message() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = ConfigStore::open(temp_dir.path()).unwrap();
    store.set(&path("themes.demo.namespace"), json!("")).unwrap();

    let err = store
        .check(&path("themes.demo.namespace"), None, Some("Missing namespace"))
        .unwrap_err();
    assert!(matches!(err, Error::ConfigInvalid { .. }));
    assert_eq!(err.to_string(), "Missing namespace");

    store.set(&path("themes.demo.menus"), json!("main")).unwrap();
    let err = store
        .check(&path("themes.demo.menus"), Some(ValueKind::Array), Some("custom message"))
        .unwrap_err();
    assert_eq!(err.to_string(), "custom message");
}

#[test]
fn test_check_kind() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = ConfigStore::open(temp_dir.path()).unwrap();
    store.set(&path("themes.demo"), json!({"menus": []})).unwrap();

    assert!(store.check(&path("themes.demo"), Some(ValueKind::Map), None).unwrap());
    assert!(store.check(&path("themes.demo.menus"), None, None).unwrap());
    assert!(matches!(
        store.check(&path("themes.demo.menus"), Some(ValueKind::String), None),
        Err(Error::ConfigInvalid { .. })
    ));
    assert!(matches!(
        store.get_str(&path("themes.demo.namespace")),
        Err(Error::ConfigMissing { .. })
    ));
}

#[test]
fn test_null_counts_as_missing() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = ConfigStore::open(temp_dir.path()).unwrap();
    store.set(&path("themes-path"), json!(null)).unwrap();

    assert!(matches!(
        store.check(&path("themes-path"), None, None),
        Err(Error::ConfigMissing { .. })
    ));
}

#[test]
fn test_init_round_trips() {
    let temp_dir = TempDir::new().unwrap();
    let document = json!({"themes-path": "wp-content/themes", "themes": {}});

    let store = ConfigStore::init(temp_dir.path(), document.clone()).unwrap();
    assert!(store.exists());

    let reopened = ConfigStore::open(temp_dir.path()).unwrap();
    assert_eq!(reopened.params(), &document);
    assert_eq!(
        read(temp_dir.path().join(CONFIG_FILE)),
        "{\n    \"themes-path\": \"wp-content/themes\",\n    \"themes\": {}\n}\n"
    );
}

#[test]
fn test_init_requires_a_map() {
    let temp_dir = TempDir::new().unwrap();
    assert!(matches!(
        ConfigStore::init(temp_dir.path(), json!(["themes"])),
        Err(Error::ConfigInvalid { .. })
    ));
    assert!(!temp_dir.path().join(CONFIG_FILE).exists());
}

#[test]
fn test_invalid_json_document() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(CONFIG_FILE), "{ not json").unwrap();

    assert!(matches!(
        ConfigStore::open(temp_dir.path()),
        Err(Error::JsonError(_))
    ));
}

#[test]
fn test_discover_from_nested_directory() {
    let temp_dir = project_dir();
    let nested = temp_dir.path().join("wp-content/themes/demo");
    fs::create_dir_all(&nested).unwrap();

    let store = ConfigStore::discover(&nested).unwrap();
    assert_eq!(store.root_path(), temp_dir.path());
}
