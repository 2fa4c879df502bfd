use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;
use themesmith::builder::ContentType;
use tempfile::TempDir;
use themesmith::cli::{locate_models_dir, Args, Command};
use themesmith::materialize::MaterializationPolicy;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("themesmith")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_init() {
    let parsed = Args::try_parse_from(make_args(&["init"])).unwrap();

    assert_eq!(parsed.command, Command::Init);
    assert!(!parsed.verbose);
    assert_eq!(parsed.root, None);
    assert_eq!(parsed.overwrite, MaterializationPolicy::AskIfExists);
}

#[test]
fn test_add_with_content_type() {
    let parsed = Args::try_parse_from(make_args(&["add", "post-type"])).unwrap();
    assert_eq!(
        parsed.command,
        Command::Add {
            content_type: Some(ContentType::PostType)
        }
    );

    let parsed = Args::try_parse_from(make_args(&["add"])).unwrap();
    assert_eq!(parsed.command, Command::Add { content_type: None });
}

#[test]
fn test_global_flags_after_subcommand() {
    let parsed = Args::try_parse_from(make_args(&[
        "add",
        "menu",
        "-v",
        "--overwrite",
        "never",
        "--root",
        "./site",
        "--models",
        "./models",
    ]))
    .unwrap();

    assert!(parsed.verbose);
    assert_eq!(parsed.overwrite, MaterializationPolicy::NeverOverwrite);
    assert_eq!(parsed.root, Some(PathBuf::from("./site")));
    assert_eq!(parsed.models_dir(), PathBuf::from("./models"));
}

#[test]
fn test_default_models_dir() {
    let parsed = Args::try_parse_from(make_args(&["--overwrite", "force", "init"])).unwrap();

    assert_eq!(parsed.overwrite, MaterializationPolicy::Force);
    assert!(parsed.models_dir().ends_with("models"));
}

#[test]
fn test_invalid_args() {
    assert!(Args::try_parse_from(make_args(&[])).is_err());
    assert!(Args::try_parse_from(make_args(&["add", "widget"])).is_err());
    assert!(Args::try_parse_from(make_args(&["init", "--overwrite", "sometimes"])).is_err());
}

#[test]
fn test_models_next_to_executable() {
    let install_dir = TempDir::new().unwrap();
    let bin_dir = install_dir.path().join("bin");
    std::fs::create_dir_all(bin_dir.join("models")).unwrap();

    assert_eq!(locate_models_dir(Some(&bin_dir)), bin_dir.join("models"));
}

#[test]
fn test_models_in_share_directory() {
    let install_dir = TempDir::new().unwrap();
    let bin_dir = install_dir.path().join("bin");
    let shared = bin_dir.join("../share/themesmith/models");
    std::fs::create_dir_all(&bin_dir).unwrap();
    std::fs::create_dir_all(&shared).unwrap();

    assert_eq!(locate_models_dir(Some(&bin_dir)), shared);
}

#[test]
fn test_models_fall_back_to_source_tree() {
    let empty = TempDir::new().unwrap();
    let source_models = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("models");

    assert_eq!(locate_models_dir(Some(empty.path())), source_models);
    assert_eq!(locate_models_dir(None), source_models);
}
