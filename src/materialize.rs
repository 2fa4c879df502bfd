//! Writing rendered content and boilerplate trees to disk.
//!
//! The functions here take an already-resolved `force` flag and never
//! prompt. Turning a [`MaterializationPolicy`] into that flag is the
//! caller's job, see [`MaterializationPolicy::resolve`].

use std::fs;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use globset::GlobSet;
use log::debug;
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::ignore::{parse_ignore_file, IGNORE_FILE};
use crate::prompt::Prompter;
use crate::template::Template;

/// Rule deciding whether an existing file may be replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum MaterializationPolicy {
    /// Always overwrite.
    Force,
    /// Ask for confirmation when the target already exists.
    #[default]
    #[value(name = "ask")]
    AskIfExists,
    /// Never overwrite.
    #[value(name = "never")]
    NeverOverwrite,
}

impl MaterializationPolicy {
    /// Resolves the policy into the `force` flag for `target`.
    ///
    /// Only `AskIfExists` on an existing target reaches the prompter.
    pub fn resolve(self, target: &Path, prompt: &dyn Prompter) -> Result<bool> {
        match self {
            Self::Force => Ok(true),
            Self::NeverOverwrite => Ok(false),
            Self::AskIfExists => {
                if !file_exists(target) {
                    return Ok(true);
                }
                prompt.confirm(
                    &format!(
                        "Attention: {} already exists! Do you want to override it?",
                        target.display()
                    ),
                    false,
                )
            }
        }
    }
}

/// Outcome of a single write.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct WriteResult {
    pub path: PathBuf,
    /// `false` when the target existed and overwriting was not authorized.
    pub written: bool,
}

/// Files touched by a copy-merge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyReport {
    pub created: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

fn absolute(path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir().unwrap_or_default().join(path)
    }
}

pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
    absolute(path.as_ref()).is_file()
}

pub fn directory_exists<P: AsRef<Path>>(path: P) -> bool {
    absolute(path.as_ref()).is_dir()
}

/// Creates `path` and its missing parents. Succeeds if it already exists.
pub fn create_directory<P: AsRef<Path>>(path: P) -> Result<()> {
    fs::create_dir_all(absolute(path.as_ref())).map_err(Error::IoError)
}

/// Writes `content` to `path` unless the file exists and `force` is false.
///
/// # Returns
/// * `Result<WriteResult>` - `written` tells whether the file was (over)written
///
/// # Errors
/// * `Error::IoError` if a directory cannot be created or the file cannot be written
pub fn write<P: AsRef<Path>>(path: P, content: &str, force: bool) -> Result<WriteResult> {
    let abs_path = absolute(path.as_ref());
    if abs_path.exists() && !force {
        debug!("Skipping existing file: {}", abs_path.display());
        return Ok(WriteResult {
            path: abs_path,
            written: false,
        });
    }

    if let Some(parent) = abs_path.parent() {
        fs::create_dir_all(parent).map_err(Error::IoError)?;
    }
    debug!("Writing file: {}", abs_path.display());
    fs::write(&abs_path, content).map_err(Error::IoError)?;
    Ok(WriteResult {
        path: abs_path,
        written: true,
    })
}

/// Resolves `policy` for `path` and writes the template content.
pub fn save<P: AsRef<Path>>(
    template: &Template,
    path: P,
    policy: MaterializationPolicy,
    prompt: &dyn Prompter,
) -> Result<WriteResult> {
    let path = path.as_ref();
    let force = policy.resolve(path, prompt)?;
    write(path, template.content(), force)
}

/// Merges the tree under `source_dir` into `dest_dir`.
///
/// Patterns from the source's ignore file and the built-in patterns are
/// honoured. Existing destination files are never overwritten.
pub fn copy_files<P: AsRef<Path>, Q: AsRef<Path>>(source_dir: P, dest_dir: Q) -> Result<CopyReport> {
    let source_dir = source_dir.as_ref();
    let ignored = parse_ignore_file(source_dir.join(IGNORE_FILE))?;
    copy_files_filtered(source_dir, dest_dir, &ignored)
}

/// Merges the tree under `source_dir` into `dest_dir`, skipping every
/// relative source path matched by `ignored`.
///
/// # Errors
/// * `Error::IoError` if the source cannot be walked or read, or the
///   destination cannot be written
pub fn copy_files_filtered<P: AsRef<Path>, Q: AsRef<Path>>(
    source_dir: P,
    dest_dir: Q,
    ignored: &GlobSet,
) -> Result<CopyReport> {
    let source_dir = absolute(source_dir.as_ref());
    let dest_dir = absolute(dest_dir.as_ref());
    let mut report = CopyReport::default();

    debug!("Copying {} into {}", source_dir.display(), dest_dir.display());

    for entry in WalkDir::new(&source_dir).sort_by_file_name() {
        let entry = entry.map_err(|e| Error::IoError(e.into()))?;
        let relative = entry
            .path()
            .strip_prefix(&source_dir)
            .map_err(|e| Error::IoError(std::io::Error::other(e)))?;

        if relative.as_os_str().is_empty() {
            create_directory(&dest_dir)?;
            continue;
        }
        if ignored.is_match(relative) {
            debug!("Skipping ignored path {}", relative.display());
            continue;
        }

        let target = dest_dir.join(relative);
        if entry.file_type().is_dir() {
            create_directory(&target)?;
        } else if target.exists() {
            debug!("Keeping existing file: {}", target.display());
            report.skipped.push(target);
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).map_err(Error::IoError)?;
            }
            fs::copy(entry.path(), &target).map_err(Error::IoError)?;
            debug!("Copied file: {}", target.display());
            report.created.push(target);
        }
    }

    Ok(report)
}
