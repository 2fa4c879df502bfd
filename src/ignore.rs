//! Ignore patterns for boilerplate copies.
//! A boilerplate directory may carry a `.themesmithignore` file listing glob
//! patterns (one per line, `#` starts a comment) of paths that must not be
//! copied into a theme. The built-in patterns always apply.

use crate::constants::DEFAULT_IGNORE_PATTERNS;
use crate::error::{Error, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use log::debug;
use std::{fs::read_to_string, io::ErrorKind, path::Path};

/// Ignore file name looked up at the root of a boilerplate
pub const IGNORE_FILE: &str = ".themesmithignore";

fn add_pattern(builder: &mut GlobSetBuilder, pattern: &str) -> Result<()> {
    let glob = Glob::new(pattern)
        .map_err(|e| Error::IgnorePatternError(format!("'{pattern}': {e}")))?;
    builder.add(glob);
    Ok(())
}

fn default_builder() -> Result<GlobSetBuilder> {
    let mut builder = GlobSetBuilder::new();
    for pattern in DEFAULT_IGNORE_PATTERNS {
        add_pattern(&mut builder, pattern)?;
    }
    Ok(builder)
}

fn build(builder: &GlobSetBuilder) -> Result<GlobSet> {
    builder.build().map_err(|e| Error::IgnorePatternError(e.to_string()))
}

/// The built-in ignore patterns.
pub fn default_ignore_set() -> Result<GlobSet> {
    build(&default_builder()?)
}

/// Reads the ignore file at `ignore_path` and merges it with the built-in patterns.
///
/// # Notes
/// - A missing ignore file yields the built-in patterns only
/// - The ignore file itself is always ignored
///
/// # Errors
/// * `Error::IoError` if the ignore file exists but cannot be read
/// * `Error::IgnorePatternError` for an invalid pattern
///
/// # Example
/// ```ignore
/// # Contents of .themesmithignore:
/// *.map
/// node_modules/**
/// ```
pub fn parse_ignore_file<P: AsRef<Path>>(ignore_path: P) -> Result<GlobSet> {
    let ignore_path = ignore_path.as_ref();
    let mut builder = default_builder()?;
    add_pattern(&mut builder, IGNORE_FILE)?;

    match read_to_string(ignore_path) {
        Ok(contents) => {
            for line in contents.lines().map(str::trim) {
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                add_pattern(&mut builder, line)?;
            }
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("{} does not exist", ignore_path.display());
        }
        Err(e) => return Err(Error::IoError(e)),
    }

    build(&builder)
}
