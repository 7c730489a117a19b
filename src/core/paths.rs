//! Path helpers for report placement and display

use std::path::{Path, PathBuf};

use crate::core::error::ExtractError;

/// Normalize a path to use '/' as separator (for cross-platform consistency)
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Sibling report path: the source extension replaced by `report_extension`
///
/// A source without an extension gets one appended. Refuses to return the
/// source path itself.
pub fn report_path(source: &Path, report_extension: &str) -> Result<PathBuf, ExtractError> {
    let report = source.with_extension(report_extension);
    if report == source {
        return Err(ExtractError::ReportCollision {
            path: source.to_path_buf(),
        });
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path(Path::new("src/Main.java")), "src/Main.java");
    }

    #[test]
    fn test_report_path_replaces_extension() {
        let report = report_path(Path::new("src/app.js"), "txt").unwrap();
        assert_eq!(report, PathBuf::from("src/app.txt"));
    }

    #[test]
    fn test_report_path_only_replaces_last_extension() {
        let report = report_path(Path::new("lib/jquery.min.js"), "txt").unwrap();
        assert_eq!(report, PathBuf::from("lib/jquery.min.txt"));
    }

    #[test]
    fn test_report_path_collision() {
        let err = report_path(Path::new("notes.txt"), "txt").unwrap_err();
        assert_eq!(err.code(), "REPORT_COLLISION");
    }
}
