//! Per-file task extraction
//!
//! Read -> scan -> write report, mapped to a single ResultItem.

use std::path::Path;

use crate::backends::discover::validate_path;
use crate::backends::report::write_report;
use crate::core::config::ExtractorConfig;
use crate::core::error::ExtractError;
use crate::core::file_reader::read_lines;
use crate::core::model::{ResultItem, Task};
use crate::core::paths::normalize_path;
use crate::scanner::scan;

/// Scan one file for tasks
///
/// Unsupported or missing files are rejected before any reading happens. A
/// read failure discards the file entirely.
pub fn scan_file(path: &Path, config: &ExtractorConfig) -> Result<Vec<Task>, ExtractError> {
    validate_path(path, config)?;
    let lines = read_lines(path, config.encoding)?;
    let tasks = scan(&lines);
    tracing::debug!(path = %path.display(), lines = lines.len(), tasks = tasks.len(), "scanned");
    Ok(tasks)
}

/// Scan a file and (optionally) write its report
pub fn process_file(path: &Path, config: &ExtractorConfig, write: bool) -> ResultItem {
    let display = normalize_path(path);

    let tasks = match scan_file(path, config) {
        Ok(tasks) => tasks,
        Err(err @ (ExtractError::UnsupportedType { .. } | ExtractError::NotFound { .. })) => {
            return ResultItem::skipped(display, err.to_report_error());
        }
        Err(err) => return ResultItem::error(display, err.to_report_error()),
    };

    if !write {
        return ResultItem::report(display, None, tasks);
    }

    match write_report(path, &tasks, &config.report_extension) {
        Ok(report) => ResultItem::report(display, Some(normalize_path(&report)), tasks),
        Err(err) => ResultItem::error(display, err.to_report_error()).with_tasks(tasks),
    }
}
