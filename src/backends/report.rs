//! Sidecar report writer
//!
//! One line per task: `<description> - line <n>`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::ExtractError;
use crate::core::model::Task;
use crate::core::paths::report_path;

/// Render tasks in report format, each line newline-terminated
pub fn format_report(tasks: &[Task]) -> String {
    tasks.iter().map(|task| format!("{}\n", task)).collect()
}

/// Write the report for `source` next to it and return the report path
///
/// An existing report is replaced. A file with no tasks gets an empty report.
pub fn write_report(
    source: &Path,
    tasks: &[Task],
    report_extension: &str,
) -> Result<PathBuf, ExtractError> {
    let path = report_path(source, report_extension)?;
    fs::write(&path, format_report(tasks)).map_err(|source| ExtractError::Write {
        path: path.clone(),
        source,
    })?;

    tracing::debug!(report = %path.display(), tasks = tasks.len(), "report written");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_format_report() {
        let tasks = vec![Task::new("write tests", 3), Task::new("handle null", 10)];
        assert_eq!(
            format_report(&tasks),
            "write tests - line 3\nhandle null - line 10\n"
        );
        assert_eq!(format_report(&[]), "");
    }

    #[test]
    fn test_write_report_round_trip() {
        let temp = tempdir().unwrap();
        let source = temp.path().join("tool.py");
        fs::write(&source, "").unwrap();
        let tasks = vec![
            Task::new("first", 1),
            Task::new("second thing", 4),
            Task::new("third", 4),
        ];

        let report = write_report(&source, &tasks, "txt").unwrap();
        assert_eq!(report, temp.path().join("tool.txt"));

        let content = fs::read_to_string(&report).unwrap();
        let lines: Vec<_> = content.lines().collect();
        let expected: Vec<_> = tasks.iter().map(|t| t.to_string()).collect();
        assert_eq!(lines, expected);
        assert_eq!(lines[1], "second thing - line 4");
    }

    #[test]
    fn test_write_report_overwrites_previous() {
        let temp = tempdir().unwrap();
        let source = temp.path().join("app.js");
        fs::write(temp.path().join("app.txt"), "stale\nlines\n").unwrap();

        write_report(&source, &[Task::new("fresh", 2)], "txt").unwrap();
        let content = fs::read_to_string(temp.path().join("app.txt")).unwrap();
        assert_eq!(content, "fresh - line 2\n");
    }

    #[test]
    fn test_write_report_empty() {
        let temp = tempdir().unwrap();
        let report = write_report(&temp.path().join("Main.java"), &[], "txt").unwrap();
        assert_eq!(fs::read_to_string(report).unwrap(), "");
    }

    #[test]
    fn test_write_report_missing_directory() {
        let temp = tempdir().unwrap();
        let source = temp.path().join("missing/dir/a.py");
        let err = write_report(&source, &[Task::new("x", 1)], "txt").unwrap_err();
        assert_eq!(err.code(), "WRITE_FAILED");
    }
}
