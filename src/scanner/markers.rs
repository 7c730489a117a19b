//! TODO/FIXME marker extraction

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::model::Task;

/// Marker head: `todo` or `fixme`, optional whitespace, mandatory colon
pub static MARKER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(todo|fixme)\s*:").expect("Invalid MARKER_RE regex"));

/// Trim a description, dropping trailing lines made only of `*` decoration
fn clean_description(raw: &str) -> &str {
    let mut text = raw.trim();
    while let Some((head, tail)) = text.rsplit_once('\n') {
        if !tail.trim().chars().all(|c| c == '*') {
            break;
        }
        text = head.trim_end();
    }
    text
}

/// Extract every marker in a comment, left to right
///
/// A description runs from the colon to the next marker head (or the end of
/// the comment) and is trimmed at both ends. In block comments the ` * `
/// gutter before the next marker is not part of the description.
pub fn extract_markers(comment: &str, line_number: u32) -> Vec<Task> {
    let heads: Vec<_> = MARKER_RE.find_iter(comment).collect();

    heads
        .iter()
        .enumerate()
        .map(|(i, head)| {
            let end = heads
                .get(i + 1)
                .map(|next| next.start())
                .unwrap_or(comment.len());
            Task::new(clean_description(&comment[head.end()..end]), line_number)
        })
        .collect()
}
