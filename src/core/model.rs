//! Result model
//!
//! Every processed file maps to one `ResultItem` before rendering, whether it
//! produced a report, was skipped, or failed.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A TODO/FIXME occurrence pulled out of a comment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Trimmed text following the marker and colon
    pub description: String,

    /// 1-based source line
    pub line_number: u32,
}

impl Task {
    pub fn new(description: impl Into<String>, line_number: u32) -> Self {
        Self {
            description: description.into(),
            line_number,
        }
    }
}

/// Report line format: `<description> - line <n>`
impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - line {}", self.description, self.line_number)
    }
}

/// The kind of result item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Report,
    Skipped,
    Error,
}

/// Error information for a result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportError {
    pub code: String,
    pub message: String,
}

impl ReportError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Outcome of processing a single file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultItem {
    pub kind: Kind,

    /// Source path as given by the user (or found by a directory walk)
    pub path: String,

    /// Report file written for this source, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<String>,

    #[serde(default)]
    pub tasks: Vec<Task>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ReportError>,
}

impl ResultItem {
    /// A scanned file; `report` is None when writing was disabled
    pub fn report(path: impl Into<String>, report: Option<String>, tasks: Vec<Task>) -> Self {
        Self {
            kind: Kind::Report,
            path: path.into(),
            report,
            tasks,
            errors: Vec::new(),
        }
    }

    pub fn skipped(path: impl Into<String>, error: ReportError) -> Self {
        Self {
            kind: Kind::Skipped,
            path: path.into(),
            report: None,
            tasks: Vec::new(),
            errors: vec![error],
        }
    }

    pub fn error(path: impl Into<String>, error: ReportError) -> Self {
        Self {
            kind: Kind::Error,
            path: path.into(),
            report: None,
            tasks: Vec::new(),
            errors: vec![error],
        }
    }

    /// Keep the collected tasks on an error item (report write failures)
    pub fn with_tasks(mut self, tasks: Vec<Task>) -> Self {
        self.tasks = tasks;
        self
    }
}

/// Result set containing one item per processed file, in processing order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResultSet {
    pub items: Vec<ResultItem>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, item: ResultItem) {
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total number of tasks across all items
    pub fn task_count(&self) -> usize {
        self.items.iter().map(|item| item.tasks.len()).sum()
    }

    pub fn error_count(&self) -> usize {
        self.items
            .iter()
            .filter(|item| item.kind == Kind::Error)
            .count()
    }
}

impl FromIterator<ResultItem> for ResultSet {
    fn from_iter<T: IntoIterator<Item = ResultItem>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_display_matches_report_line() {
        let task = Task::new("write tests", 3);
        assert_eq!(task.to_string(), "write tests - line 3");
    }

    #[test]
    fn test_result_item_serialization() {
        let item = ResultItem::report("src/App.java", None, vec![Task::new("x", 1)]);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["kind"], "report");
        assert!(json.get("report").is_none());
        assert!(json.get("errors").is_none());
        assert_eq!(json["tasks"][0]["line_number"], 1);
    }

    #[test]
    fn test_result_set_counts() {
        let mut set = ResultSet::new();
        set.push(ResultItem::report(
            "a.py",
            Some("a.txt".into()),
            vec![Task::new("one", 1), Task::new("two", 2)],
        ));
        set.push(ResultItem::error("b.py", ReportError::new("READ_FAILED", "boom")));
        set.push(ResultItem::skipped(
            "c.md",
            ReportError::new("UNSUPPORTED_TYPE", "nope"),
        ));

        assert_eq!(set.len(), 3);
        assert_eq!(set.task_count(), 2);
        assert_eq!(set.error_count(), 1);
    }
}
