use std::io;

use themesmith::error::Error;
use themesmith::value::ValueKind;

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();

    match err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }

    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    assert!(matches!(Error::from(json_err), Error::JsonError(_)));
}

#[test]
fn test_error_display() {
    let err = Error::ConfigMissing {
        path: "themes-path".to_string(),
        message: "Missing themes path".to_string(),
    };
    assert_eq!(err.to_string(), "Missing themes path");

    let err = Error::ConfigType {
        path: "themes-path".to_string(),
        found: ValueKind::String,
    };
    assert_eq!(
        err.to_string(),
        "Configuration error: cannot append to 'themes-path', it holds a string instead of an array."
    );

    let err = Error::ModelNotFound {
        model: "widget".to_string(),
        location: "models".to_string(),
    };
    assert_eq!(err.to_string(), "Template model 'widget' not found in 'models'.");

    let err = Error::BuildError("unable to create menu because of missing parameters".to_string());
    assert_eq!(
        err.to_string(),
        "Error: unable to create menu because of missing parameters."
    );
}
