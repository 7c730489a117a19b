//! Input selection
//!
//! Validates user-supplied paths and expands directories into the supported
//! files below them (via the `ignore` crate, so `.gitignore` is respected).

use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

use crate::core::config::ExtractorConfig;
use crate::core::error::ExtractError;

/// Options for expanding directory arguments
#[derive(Debug, Clone, Copy, Default)]
pub struct WalkOptions {
    /// Include hidden files and directories
    pub hidden: bool,
    /// Disable .gitignore and other ignore rules
    pub no_ignore: bool,
}

/// Check that a path names an existing file with a supported extension
pub fn validate_path(path: &Path, config: &ExtractorConfig) -> Result<(), ExtractError> {
    if !path.is_file() {
        return Err(ExtractError::NotFound {
            path: path.to_path_buf(),
        });
    }
    if !config.is_supported(path) {
        return Err(ExtractError::UnsupportedType {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// Supported files under a directory, sorted for stable output
pub fn walk_dir(dir: &Path, config: &ExtractorConfig, options: WalkOptions) -> Vec<PathBuf> {
    let ignore = !options.no_ignore;
    let mut builder = WalkBuilder::new(dir);
    builder
        .hidden(!options.hidden)
        .git_ignore(ignore)
        .git_global(ignore)
        .git_exclude(ignore)
        .ignore(ignore)
        .parents(ignore);

    let mut files: Vec<PathBuf> = builder
        .build()
        .filter_map(|entry| match entry {
            Ok(e) => Some(e),
            Err(err) => {
                tracing::warn!(error = %err, "skipping unreadable entry");
                None
            }
        })
        .filter(|entry| entry.file_type().is_some_and(|t| t.is_file()))
        .map(|entry| entry.into_path())
        .filter(|path| config.is_supported(path))
        .collect();

    files.sort();
    files
}

/// Expand CLI arguments into per-file selections, preserving argument order
///
/// Files are validated individually; directories contribute their supported
/// files. Invalid arguments come back as errors so the caller can report and
/// skip them.
pub fn collect_files(
    paths: &[PathBuf],
    config: &ExtractorConfig,
    options: WalkOptions,
) -> Vec<Result<PathBuf, ExtractError>> {
    let mut selections = Vec::new();

    for path in paths {
        if path.is_dir() {
            let found = walk_dir(path, config, options);
            tracing::debug!(dir = %path.display(), files = found.len(), "expanded directory");
            selections.extend(found.into_iter().map(Ok));
        } else {
            selections.push(validate_path(path, config).map(|()| path.clone()));
        }
    }

    selections
}
